// LinkedIn content tasks: post generation, post analysis, profile optimization.
// Every gateway call goes through llm_client; the demo module covers the rest.

pub mod demo;
pub mod generator;
pub mod handlers;
pub mod hashtags;
pub mod models;
pub mod prompts;
