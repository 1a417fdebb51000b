use crate::cli::utils::{format_timestamp, print_json};
use crate::cli::OutputFormat;
use crate::client::ApiClient;

pub async fn handle(
    client: &ApiClient,
    thread_id: i64,
    kind: &str,
    content: &str,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let message = client.post_message(thread_id, kind, content).await?;

    match output_format {
        OutputFormat::Json => print_json(&message)?,
        OutputFormat::Text => println!(
            "Posted message #{} to thread #{} at {}",
            message.id,
            message.thread_id,
            format_timestamp(&message.created_at)
        ),
    }
    Ok(())
}
