// Resume tailoring: prompt construction, provider call, and the HTTP front door.
// All provider calls go through llm_client, never directly from here.

pub mod handlers;
pub mod prompts;
pub mod service;
