//! Feedback submission demonstration
//!
//! Posts one feedback record of each kind to the collector's `/feedback`
//! endpoint and reports whether the collector accepted it. With
//! `MIDDLE_AI_ENDPOINT` unset every submission returns `false` without any
//! network call.
//!
//! # Running the example
//!
//! ```bash
//! MIDDLE_AI_ENDPOINT=http://localhost:4318 \
//! MIDDLE_AI_API_KEY=dev-key cargo run --example feedback_demo
//! ```

use anyhow::Result;
use dotenv::dotenv;
use middle_ai::prelude::*;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = TracerConfig::from_env();
    let tracer = Tracer::new("feedback-demo", config)?;

    let thread_id = Uuid::new_v4().to_string();

    let submissions = [
        (FeedbackType::Thumbs, "up"),
        (FeedbackType::Emoji, ":rocket:"),
        (FeedbackType::Scale, "4"),
    ];

    for (feedback_type, value) in submissions {
        let delivered = tracer
            .send_feedback(thread_id.as_str(), "demo-user", feedback_type, value)
            .await;
        println!("{:?} feedback {:?} delivered: {}", feedback_type, value, delivered);
    }

    Ok(())
}
