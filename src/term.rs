//! Terminal rendering of the result panel and notices.

use std::io::Write;

use crate::app::{Panel, BUSY_LABEL, COPIED_LABEL};
use crate::badge::{badge_for, Badge};

const RESET: &str = "\x1b[0m";
const RULE: &str = "────────────────────────────────────────";

fn class_color(class: &str) -> &'static str {
    match class {
        "badge b-hf" => "\x1b[35m",
        "badge b-ml" => "\x1b[34m",
        "badge b-h" => "\x1b[33m",
        _ => "\x1b[2m",
    }
}

fn origin_line(badge: &Badge) -> String {
    if badge.title.is_empty() {
        badge.label.to_string()
    } else {
        format!("{} ({})", badge.label, badge.title)
    }
}

pub struct TermPanel {
    category: String,
    confidence: String,
    reply: String,
    badge: Badge,
}

impl TermPanel {
    pub fn new() -> Self {
        Self {
            category: "-".to_string(),
            confidence: "-".to_string(),
            reply: String::new(),
            badge: badge_for(None),
        }
    }
}

impl Panel for TermPanel {
    fn notice(&mut self, message: &str) {
        eprintln!("[!] {}", message);
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("{}", BUSY_LABEL);
        }
    }

    fn set_category(&mut self, text: &str) {
        self.category = text.to_string();
    }

    fn set_confidence(&mut self, text: &str) {
        self.confidence = text.to_string();
    }

    fn set_reply(&mut self, text: &str) {
        self.reply = text.to_string();
    }

    fn set_badge(&mut self, badge: &Badge) {
        self.badge = *badge;
    }

    fn hide_result(&mut self) {
        // Nothing to erase: a previous result block simply scrolls away.
    }

    fn reveal_result(&mut self) {
        println!("{}", RULE);
        println!("Categoria:  {}", self.category);
        println!("Confiança:  {}", self.confidence);
        println!(
            "Origem:     {}{}{}",
            class_color(self.badge.class),
            origin_line(&self.badge),
            RESET
        );
        println!("Resposta sugerida:");
        println!("{}", self.reply);
        println!("{}", RULE);
    }

    fn reply_text(&self) -> String {
        self.reply.clone()
    }

    fn set_copy_label(&mut self, label: &str) {
        if label == COPIED_LABEL {
            println!("{}", COPIED_LABEL);
        }
    }

    /// OSC 52 clipboard write. Works in iTerm2, kitty, WezTerm, Ghostty and
    /// most modern terminals.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), anyhow::Error> {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        let mut stdout = std::io::stdout();
        stdout.write_all(format!("\x1b]52;c;{}\x07", encoded).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
