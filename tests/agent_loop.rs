//! End-to-end loop behavior with a scripted LLM and stub tools.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::BoxFuture;

use mini_react::agent::Agent;
use mini_react::llm::error::LlmError;
use mini_react::llm::traits::Llm;
use mini_react::llm::LlmResult;
use mini_react::tools::error::ToolError;
use mini_react::tools::name::ToolName;
use mini_react::tools::traits::Tool;
use mini_react::trace::MemoryTrace;

/// Replays a fixed sequence of responses and counts how often it was called.
/// Runs dry with unparseable output once the script is exhausted.
struct ScriptedLlm {
    responses: Mutex<VecDeque<String>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedLlm {
    fn new(responses: &[&str]) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let llm = Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            calls: calls.clone(),
        });
        (llm, calls)
    }
}

impl Llm for ScriptedLlm {
    fn generate<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, LlmResult<String>> {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.responses.lock().unwrap().pop_front();
            Ok(next.unwrap_or_else(|| "not json".to_string()))
        }
        .boxed()
    }
}

struct FailingLlm;

impl Llm for FailingLlm {
    fn generate<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, LlmResult<String>> {
        async move { Err(LlmError::InvalidResponse("quota exceeded".to_string())) }.boxed()
    }
}

struct StaticTool {
    name: ToolName,
    output: &'static str,
    seen_inputs: Mutex<Vec<String>>,
}

impl StaticTool {
    fn new(name: ToolName, output: &'static str) -> Self {
        Self {
            name,
            output,
            seen_inputs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl Tool for StaticTool {
    fn name(&self) -> ToolName {
        self.name
    }
    fn description(&self) -> &str {
        "static test tool"
    }
    async fn call(&self, query: &str) -> Result<String, ToolError> {
        self.seen_inputs.lock().unwrap().push(query.to_string());
        Ok(self.output.to_string())
    }
}

struct BrokenTool;

#[async_trait::async_trait]
impl Tool for BrokenTool {
    fn name(&self) -> ToolName {
        ToolName::IssLocation
    }
    fn description(&self) -> &str {
        "always fails"
    }
    async fn call(&self, _query: &str) -> Result<String, ToolError> {
        Err(ToolError::ExecutionError {
            name: "ISS_LOCATION".to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

fn agent_with(llm: Arc<dyn Llm>, max_iterations: usize) -> Agent {
    Agent::new("test", llm, Some(max_iterations))
}

#[tokio::test]
async fn direct_answer_finishes_after_one_llm_call() {
    let (llm, calls) = ScriptedLlm::new(&[r#"{"answer": "42"}"#]);
    let agent = agent_with(llm, 5);

    let answer = agent.execute("meaning of life?").await.unwrap();
    assert_eq!(answer, "Final Answer: 42");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn one_tool_round_trip() {
    let (llm, calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "CAT_FACT", "input": "x"}}"#,
        r#"{"answer": "Cats sleep a lot."}"#,
    ]);
    let mut agent = agent_with(llm, 5);
    agent.register_tool(Arc::new(StaticTool::new(
        ToolName::CatFact,
        "Cats sleep a lot.",
    )));

    let answer = agent.execute("tell me about cats").await.unwrap();
    assert!(answer.contains("Cats sleep a lot."));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn malformed_json_recovers_on_the_next_turn() {
    let (llm, calls) = ScriptedLlm::new(&["not json at all", r#"{"answer": "ok"}"#]);
    let agent = agent_with(llm, 5);

    let trace = MemoryTrace::new();
    let answer = agent
        .execute_traced("q", Box::new(trace.clone()))
        .await
        .unwrap();
    assert_eq!(answer, "Final Answer: ok");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(trace.lines().iter().any(|l| l.contains(
        "I encountered an error in processing. Let me try again."
    )));
}

#[tokio::test]
async fn budget_exhaustion_yields_a_summary_not_an_error() {
    let (llm, calls) = ScriptedLlm::new(&[]);
    let agent = agent_with(llm, 2);

    let answer = agent.execute("q").await.unwrap();
    assert!(answer.contains("allowed number of iterations"));
    // the gathered history rides along in the summary
    assert!(answer.contains("user: q"));
    // turns 1 and 2 reach the LLM; turn 3 hits the guard first
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn none_sentinel_consumes_an_iteration() {
    let (llm, calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "none"}}"#,
        r#"{"answer": "done"}"#,
    ]);
    let agent = agent_with(llm, 5);

    let answer = agent.execute("q").await.unwrap();
    assert_eq!(answer, "Final Answer: done");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unknown_tool_name_is_recoverable() {
    let (llm, calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "FROBNICATE"}}"#,
        r#"{"answer": "ok"}"#,
    ]);
    let agent = agent_with(llm, 5);

    let trace = MemoryTrace::new();
    let answer = agent
        .execute_traced("q", Box::new(trace.clone()))
        .await
        .unwrap();
    assert_eq!(answer, "Final Answer: ok");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(trace.lines().iter().any(|l| l.contains(
        "I encountered an unexpected error. Let me try a different approach."
    )));
}

#[tokio::test]
async fn unregistered_tool_is_observed_not_fatal() {
    let (llm, _calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "CAT_FACT", "input": "x"}}"#,
        r#"{"answer": "ok"}"#,
    ]);
    // nothing registered
    let agent = agent_with(llm, 5);

    let trace = MemoryTrace::new();
    let answer = agent
        .execute_traced("q", Box::new(trace.clone()))
        .await
        .unwrap();
    assert_eq!(answer, "Final Answer: ok");
    let lines = trace.lines();
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("system: Observation from CAT_FACT") && l.contains("not found"))
    );
}

#[tokio::test]
async fn tool_failure_is_fed_back_as_an_observation() {
    let (llm, _calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "ISS_LOCATION"}}"#,
        r#"{"answer": "ok"}"#,
    ]);
    let mut agent = agent_with(llm, 5);
    agent.register_tool(Arc::new(BrokenTool));

    let trace = MemoryTrace::new();
    let answer = agent
        .execute_traced("q", Box::new(trace.clone()))
        .await
        .unwrap();
    assert_eq!(answer, "Final Answer: ok");
    assert!(trace.lines().iter().any(|l| {
        l.starts_with("system: Observation from ISS_LOCATION") && l.contains("connection refused")
    }));
}

#[tokio::test]
async fn action_without_input_passes_the_original_query_to_the_tool() {
    let (llm, _calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "CAT_FACT"}}"#,
        r#"{"answer": "ok"}"#,
    ]);
    let tool = Arc::new(StaticTool::new(ToolName::CatFact, "fact"));
    let mut agent = agent_with(llm, 5);
    agent.register_tool(tool.clone());

    agent.execute("tell me about cats").await.unwrap();
    let seen = tool.seen_inputs.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], "tell me about cats");
}

#[tokio::test]
async fn llm_failure_propagates_to_the_caller() {
    let agent = agent_with(Arc::new(FailingLlm), 5);
    let err = agent.execute("q").await.unwrap_err();
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn trace_sink_sees_every_logged_message() {
    let (llm, _calls) = ScriptedLlm::new(&[
        r#"{"action": {"name": "CAT_FACT", "input": "x"}}"#,
        r#"{"answer": "done"}"#,
    ]);
    let mut agent = agent_with(llm, 5);
    agent.register_tool(Arc::new(StaticTool::new(ToolName::CatFact, "fact")));

    let trace = MemoryTrace::new();
    agent.execute_traced("q", Box::new(trace.clone())).await.unwrap();

    let lines = trace.lines();
    // user query, thought, action, observation, thought, final answer
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "user: q");
    assert!(lines[1].starts_with("assistant: Thought:"));
    assert_eq!(lines[2], "assistant: Action: Using CAT_FACT tool");
    assert_eq!(lines[3], "system: Observation from CAT_FACT: fact");
    assert!(lines[5].starts_with("assistant: Final Answer: done"));
}

#[tokio::test]
async fn adversarial_llm_never_exceeds_the_budget() {
    // script never produces a valid decision
    let (llm, calls) = ScriptedLlm::new(&[]);
    let agent = agent_with(llm, 7);
    let answer = agent.execute("q").await.unwrap();
    assert!(answer.contains("allowed number of iterations"));
    assert_eq!(calls.load(Ordering::SeqCst), 7);
}
