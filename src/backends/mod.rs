pub mod openai;

pub use openai::OpenAI;
