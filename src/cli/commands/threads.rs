use clap::Subcommand;

use crate::cli::utils::{format_timestamp, print_json};
use crate::cli::OutputFormat;
use crate::client::ApiClient;

#[derive(Subcommand)]
pub enum ThreadCommands {
    #[command(about = "List all threads, newest first")]
    List,

    #[command(about = "Show a thread and its messages")]
    Show {
        #[arg(help = "Thread id")]
        id: i64,
    },

    #[command(about = "Create a thread with its first message")]
    Create {
        #[arg(help = "Thread title")]
        title: String,
        #[arg(help = "First message content")]
        content: String,
    },

    #[command(about = "Rename a thread")]
    Rename {
        #[arg(help = "Thread id")]
        id: i64,
        #[arg(help = "New title")]
        title: String,
    },

    #[command(about = "Delete a thread and all its messages")]
    Delete {
        #[arg(help = "Thread id")]
        id: i64,
    },
}

pub async fn handle(
    cmd: ThreadCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        ThreadCommands::List => {
            let threads = client.list_threads().await?;
            match output_format {
                OutputFormat::Json => print_json(&threads)?,
                OutputFormat::Text => {
                    if threads.is_empty() {
                        println!("No threads yet.");
                    }
                    for thread in &threads {
                        println!(
                            "{:>6}  {}  {}",
                            thread.id,
                            format_timestamp(&thread.created_at),
                            thread.title
                        );
                    }
                }
            }
            Ok(())
        }
        ThreadCommands::Show { id } => {
            let thread = client.get_thread(id).await?;
            let messages = client.list_messages(id).await?;
            match output_format {
                OutputFormat::Json => {
                    print_json(&serde_json::json!({ "thread": thread, "messages": messages }))?
                }
                OutputFormat::Text => {
                    println!("#{} {}", thread.id, thread.title);
                    println!("created {}", format_timestamp(&thread.created_at));
                    println!();
                    for message in &messages {
                        println!(
                            "[{}] {}: {}",
                            format_timestamp(&message.created_at),
                            message.kind,
                            message.content
                        );
                    }
                }
            }
            Ok(())
        }
        ThreadCommands::Create { title, content } => {
            let created = client.create_thread(&title, &content).await?;
            match output_format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "thread": created.thread,
                    "message": created.message,
                }))?,
                OutputFormat::Text => println!(
                    "Created thread #{} ({}) with message #{}",
                    created.thread.id, created.thread.title, created.message.id
                ),
            }
            Ok(())
        }
        ThreadCommands::Rename { id, title } => {
            let thread = client.rename_thread(id, &title).await?;
            match output_format {
                OutputFormat::Json => print_json(&thread)?,
                OutputFormat::Text => println!("Renamed thread #{} to {}", thread.id, thread.title),
            }
            Ok(())
        }
        ThreadCommands::Delete { id } => {
            let deleted = client.delete_thread(id).await?;
            match output_format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "message": deleted.message,
                    "deletedId": deleted.deleted_id,
                }))?,
                OutputFormat::Text => println!("Deleted thread #{}", deleted.deleted_id),
            }
            Ok(())
        }
    }
}
