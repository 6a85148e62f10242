mod client;

pub use client::PollsClient;
