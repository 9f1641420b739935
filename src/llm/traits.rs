use std::sync::Arc;

use futures::future::BoxFuture;

use crate::llm::LlmResult;

/// Convert a concrete L into an `Arc<dyn Llm>`.
pub fn llm_to_arc_dyn<L>(llm: L) -> Arc<dyn Llm>
where
    L: 'static + Llm,
{
    Arc::new(llm)
}

/// Text-generation capability consumed by the agent: one prompt in, one
/// complete text out. No streaming.
///
/// Note:
/// - We intentionally do not use `async_trait` here so that returned futures
///   can be annotated with the input lifetime `'a` (implementations may borrow
///   the prompt instead of cloning it).
/// - Errors are fatal to the agent turn that issued the call: the loop does
///   not absorb them the way it absorbs tool failures.
pub trait Llm: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, LlmResult<String>>;
}
