//! Project-wide constants.

/// Where the server under test listens by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Endpoint that hands a prompt to the Claude Code engine.
pub const TEST_ENDPOINT: &str = "/api/claude-code/test-claude";

/// The fixed smoke battery: a greeting, a trivial task, a creative task.
pub const SMOKE_PROMPTS: [&str; 3] = [
    "say hello in exactly 3 words",
    "what is 2+2? answer with just the number",
    "describe a sunset in one sentence",
];
