use crate::domain::generation::{FormFile, GenerationRequest, GenerationServiceApi};
use anyhow::Result;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive stand-in for the hosting page's form.
///
/// Collects the three fields, loads the referenced files and submits
/// through the handler. A submission whose file cannot be read is
/// reported and skipped without contacting the endpoint. Runs until an
/// empty script or end of input.
pub async fn run(service: &dyn GenerationServiceApi) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("VoiceLab voice generation");
    println!("Submit a script and a reference voice sample; empty script quits.");

    loop {
        println!();
        println!("Script text:");
        let text = match lines.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => break,
        };
        if text.is_empty() {
            break;
        }

        println!("Voice sample path:");
        let voice_path = match lines.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => break,
        };

        println!("Style reference path (blank for none):");
        let style_path = match lines.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => break,
        };

        let voice_file = match load_form_file(&voice_path).await {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Could not read voice sample {}: {}", voice_path, e);
                continue;
            }
        };

        let style_file = if style_path.is_empty() {
            None
        } else {
            match load_form_file(&style_path).await {
                Ok(file) => Some(file),
                Err(e) => {
                    eprintln!("Could not read style reference {}: {}", style_path, e);
                    continue;
                }
            }
        };

        // The outcome is already rendered through the view; a failed
        // submission is not fatal to the loop.
        let _ = service
            .submit(GenerationRequest {
                text,
                voice_file,
                style_file,
            })
            .await;
    }

    Ok(())
}

async fn load_form_file(path: &str) -> Result<FormFile> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    Ok(FormFile { file_name, bytes })
}
