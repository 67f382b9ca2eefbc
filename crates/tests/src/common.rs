use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::document::{Document, Eval, EvalError, Evaluator};
use dioxus::prelude::*;
use serde_json::Value;

/// Render `app` once on the server and return the markup.
///
/// Effects never run here, so anything registered from an effect (item
/// labels, measured positions) is absent from the output. Use [`Harness`]
/// for that.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[derive(Default)]
struct DocumentState {
    owner: Owner,
    scripts: RefCell<Vec<String>>,
    replies: RefCell<Vec<(String, Value)>>,
    messages: RefCell<Vec<(String, Value)>>,
}

/// Stand-in for the browser document.
///
/// Records every script the components run. A script containing a
/// registered needle returns the matching reply, or delivers the matching
/// message once through its channel; everything else returns `null`.
#[derive(Clone, Default)]
pub struct ScriptedDocument {
    state: Rc<DocumentState>,
}

impl ScriptedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, needle: &str, value: Value) -> Self {
        self.state.replies.borrow_mut().push((needle.to_string(), value));
        self
    }

    pub fn message(self, needle: &str, value: Value) -> Self {
        self.state.messages.borrow_mut().push((needle.to_string(), value));
        self
    }

    /// Number of scripts run so far that contain `needle`.
    pub fn ran(&self, needle: &str) -> usize {
        self.state
            .scripts
            .borrow()
            .iter()
            .filter(|script| script.contains(needle))
            .count()
    }
}

struct ScriptedEval {
    reply: Option<Value>,
    messages: VecDeque<Value>,
}

impl Evaluator for ScriptedEval {
    fn send(&self, _data: Value) -> Result<(), EvalError> {
        Ok(())
    }

    fn poll_recv(&mut self, _cx: &mut Context<'_>) -> Poll<Result<Value, EvalError>> {
        match self.messages.pop_front() {
            Some(message) => Poll::Ready(Ok(message)),
            None => Poll::Pending,
        }
    }

    fn poll_join(&mut self, _cx: &mut Context<'_>) -> Poll<Result<Value, EvalError>> {
        Poll::Ready(self.reply.take().ok_or(EvalError::Finished))
    }
}

impl Document for ScriptedDocument {
    fn eval(&self, js: String) -> Eval {
        let reply = self
            .state
            .replies
            .borrow()
            .iter()
            .find(|(needle, _)| js.contains(needle.as_str()))
            .map(|(_, value)| value.clone())
            .unwrap_or(Value::Null);
        let messages = self
            .state
            .messages
            .borrow()
            .iter()
            .filter(|(needle, _)| js.contains(needle.as_str()))
            .map(|(_, value)| value.clone())
            .collect();
        self.state.scripts.borrow_mut().push(js);

        let evaluator: Box<dyn Evaluator> = Box::new(ScriptedEval {
            reply: Some(reply),
            messages,
        });
        Eval::new(self.state.owner.insert(evaluator))
    }
}

/// A live `VirtualDom` whose effects and tasks run against a [`ScriptedDocument`].
pub struct Harness {
    pub dom: VirtualDom,
    pub document: ScriptedDocument,
}

impl Harness {
    /// Build `app`, then let every effect and task run until nothing is left to do.
    pub async fn mount(app: fn() -> Element, document: ScriptedDocument) -> Self {
        let shared: Rc<dyn Document> = Rc::new(document.clone());
        let mut dom = VirtualDom::new(app).with_root_context(shared);
        dom.rebuild_in_place();
        let mut harness = Self { dom, document };
        harness.settle().await;
        harness
    }

    pub async fn settle(&mut self) {
        for _ in 0..64 {
            let work = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            if work.is_err() {
                break;
            }
            self.dom.render_immediate(&mut NoOpMutations);
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
