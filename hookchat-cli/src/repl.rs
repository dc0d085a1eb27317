//! Interactive loop: reads lines from stdin, prints the conversation as it grows.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use hookchat_conversation::{ChatController, FileUpload, UploadKind};
use hookchat_core::{Message, MessageKind, Sender};
use hookchat_store::{get_preferred_voice, set_preferred_voice, SqliteKvStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const HELP: &str = "\
Commands:
  /location        share your location (HOOKCHAT_LAT/HOOKCHAT_LON)
  /file <path>     attach a file
  /image <path>    attach an image
  /camera <path>   attach a camera capture
  /voice [name]    show or set the preferred voice
  /help            show this help
  /quit            exit
Anything else is sent as a text message.";

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

fn print_message(message: &Message) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    let time = message.timestamp.format("%H:%M");
    match message.kind {
        MessageKind::Audio => {
            let payload_len = message
                .audio_payload
                .as_ref()
                .map(|p| p.len())
                .unwrap_or(0);
            println!("[{} {}] {} ({} base64 bytes)", time, who, message.text, payload_len);
        }
        _ => println!("[{} {}] {}", time, who, message.text),
    }
}

/// Prints every message appended since the last call.
fn print_new_messages(controller: &ChatController, seen: &mut usize) {
    for message in &controller.conversation().messages()[*seen..] {
        print_message(message);
    }
    *seen = controller.conversation().len();
}

async fn attach(controller: &mut ChatController, raw_path: &str, kind: UploadKind) {
    let path = PathBuf::from(raw_path.trim());
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read attachment");
            eprintln!("! Could not read {}: {}", path.display(), e);
            return;
        }
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();
    let upload = FileUpload {
        mime_type: mime_for_path(&path).to_string(),
        file_name,
        bytes,
        local_path: path,
    };

    controller.attach_file(upload, kind).await;
}

async fn voice_command(store: &SqliteKvStore, argument: &str) -> Result<()> {
    let argument = argument.trim();
    if argument.is_empty() {
        match get_preferred_voice(store).await? {
            Some(voice) => println!("Preferred voice: {}", voice),
            None => println!("No preferred voice set."),
        }
    } else {
        set_preferred_voice(store, argument).await?;
        println!("Preferred voice set to {}", argument);
    }
    Ok(())
}

/// Runs the chat loop until EOF or `/quit`.
pub async fn run(controller: &mut ChatController, store: &SqliteKvStore) -> Result<()> {
    let mut seen = 0;
    print_new_messages(controller, &mut seen);
    println!("(/help for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{}", HELP);
                continue;
            }
            "/location" => controller.share_location().await,
            _ if line.starts_with("/file ") => {
                attach(controller, &line["/file ".len()..], UploadKind::File).await
            }
            _ if line.starts_with("/image ") => {
                attach(controller, &line["/image ".len()..], UploadKind::Image).await
            }
            _ if line.starts_with("/camera ") => {
                attach(controller, &line["/camera ".len()..], UploadKind::Camera).await
            }
            _ if line == "/voice" || line.starts_with("/voice ") => {
                voice_command(store, line.strip_prefix("/voice").unwrap_or("")).await?;
                continue;
            }
            _ if line.starts_with('/') => {
                eprintln!("! Unknown command: {} (/help for commands)", line);
                continue;
            }
            text => controller.send_text(text).await,
        }

        print_new_messages(controller, &mut seen);
    }

    Ok(())
}
