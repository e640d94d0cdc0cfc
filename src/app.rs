//! Submission controller: wires the two user actions (process, copy reply)
//! to the classification client and an injected UI panel.

use crate::badge::{badge_for, format_confidence, Badge};
use crate::classify::{Classifier, Input};

pub const PROCESS_LABEL: &str = "Processar";
pub const BUSY_LABEL: &str = "Processando...";
pub const COPY_LABEL: &str = "Copiar resposta";
pub const COPIED_LABEL: &str = "Copiado!";

const MISSING_INPUT_NOTICE: &str = "Cole um texto ou selecione um arquivo .txt/.pdf/.eml";
const COPY_CONFIRM: std::time::Duration = std::time::Duration::from_millis(1200);

/// The UI surface the controller drives. One implementation renders to the
/// terminal; tests substitute a recording double.
pub trait Panel {
    /// Blocking, user-facing notice (the browser `alert` equivalent).
    fn notice(&mut self, message: &str);
    /// Toggle the submit control between `Processar` and `Processando...`.
    fn set_busy(&mut self, busy: bool);
    fn set_category(&mut self, text: &str);
    fn set_confidence(&mut self, text: &str);
    fn set_reply(&mut self, text: &str);
    fn set_badge(&mut self, badge: &Badge);
    fn hide_result(&mut self);
    fn reveal_result(&mut self);
    fn reply_text(&self) -> String;
    fn set_copy_label(&mut self, label: &str);
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), anyhow::Error>;
}

/// Scoped busy state: acquired before the request goes out, released on drop,
/// so every exit path re-enables the control.
struct Busy<'a, P: Panel> {
    panel: &'a mut P,
}

impl<'a, P: Panel> Busy<'a, P> {
    fn new(panel: &'a mut P) -> Self {
        panel.set_busy(true);
        Self { panel }
    }
}

impl<P: Panel> Drop for Busy<'_, P> {
    fn drop(&mut self) {
        self.panel.set_busy(false);
    }
}

impl<P: Panel> std::ops::Deref for Busy<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.panel
    }
}

impl<P: Panel> std::ops::DerefMut for Busy<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.panel
    }
}

pub struct App<C, P> {
    classifier: C,
    panel: P,
    text: String,
    file: Option<std::path::PathBuf>,
}

impl<C: Classifier, P: Panel> App<C, P> {
    pub fn new(classifier: C, panel: P) -> Self {
        Self {
            classifier,
            panel,
            text: String::new(),
            file: None,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_file(&mut self, path: Option<std::path::PathBuf>) {
        self.file = path;
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// One submission cycle. When both a file and text are set the file wins;
    /// the text is ignored for that attempt.
    pub async fn submit(&mut self) {
        let text = self.text.trim().to_string();
        let file = self.file.clone();

        if file.is_none() && text.is_empty() {
            self.panel.notice(MISSING_INPUT_NOTICE);
            return;
        }

        // Drop the previous result before the request goes out.
        self.panel.set_category("-");
        self.panel.set_confidence("-");
        self.panel.set_reply("");
        self.panel.set_badge(&badge_for(None));
        self.panel.hide_result();

        let classifier = &self.classifier;
        let mut panel = Busy::new(&mut self.panel);

        let outcome = async {
            let input = match &file {
                Some(path) => {
                    let bytes = tokio::fs::read(path)
                        .await
                        .map_err(|e| anyhow::format_err!("{}: {}", path.display(), e))?;
                    Input::File {
                        name: path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| "arquivo".to_string()),
                        bytes,
                    }
                }
                None => Input::Text(text),
            };

            let result = classifier.classify(&input).await?;

            panel.set_category(result.categoria.as_deref().unwrap_or("-"));
            panel.set_confidence(&format_confidence(result.confianca));
            panel.set_reply(result.resposta_sugerida.as_deref().unwrap_or(""));
            panel.set_badge(&badge_for(result.origem.as_deref()));
            panel.reveal_result();

            Ok::<_, anyhow::Error>(())
        }
        .await;

        if let Err(e) = outcome {
            panel.notice(&format!("Erro ao classificar: {}", e));
        }
    }

    /// Copy the current reply text to the clipboard. Fire-and-forget with
    /// respect to the submission state machine.
    pub async fn copy_reply(&mut self) {
        let reply = self.panel.reply_text();
        match self.panel.copy_to_clipboard(&reply) {
            Ok(()) => {
                self.panel.set_copy_label(COPIED_LABEL);
                tokio::time::sleep(COPY_CONFIRM).await;
                self.panel.set_copy_label(COPY_LABEL);
            }
            Err(_) => self.panel.notice("Não foi possível copiar."),
        }
    }
}
