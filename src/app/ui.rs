use super::DocDropApp;
use crate::document::{DocumentDescriptor, DocumentKind};
use crate::utils::file_size;
use eframe::egui::{self, RichText};

fn kind_icon(doc: &DocumentDescriptor) -> &'static str {
    match doc.kind() {
        DocumentKind::Image => "🖼",
        DocumentKind::Pdf => "📄",
        DocumentKind::Other => "📎",
    }
}

impl DocDropApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("📁 Select files").clicked() {
                    self.pick_documents();
                }
                ui.add_enabled_ui(!self.state.is_uploading, |ui| {
                    if ui.button("📤 Upload files").clicked() {
                        self.start_upload();
                    }
                });
            });
            ui.add_space(10.0);

            if !self.selection.is_empty() {
                self.render_selection(ui);
            }

            if self.state.is_uploading {
                ui.add_space(10.0);
                match self.state.progress_text() {
                    Some(text) => ui.label(format!("Uploading... {}", text)),
                    None => ui.label("Uploading..."),
                };
            }
        });

        self.render_preview(ctx);
    }

    fn render_selection(&mut self, ui: &mut egui::Ui) {
        let mut delete_index = None;
        let mut preview_doc = None;

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 60.0).max(120.0))
            .show(ui, |ui| {
                for (index, doc) in self.selection.docs().iter().enumerate() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(kind_icon(doc));
                            if ui.link(&doc.name).clicked() {
                                preview_doc = Some(doc.clone());
                            }
                            if let Some(size) = doc.size {
                                ui.label(
                                    RichText::new(file_size::format_size(size))
                                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                                );
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("🗑").clicked() {
                                        delete_index = Some(index);
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        if let Some(doc) = preview_doc {
            self.preview = Some(doc);
        }
        if let Some(index) = delete_index {
            self.delete_at(index);
        }
    }

    fn render_preview(&mut self, ctx: &egui::Context) {
        let Some(doc) = self.preview.clone() else {
            return;
        };

        let mut open = true;
        egui::Window::new(doc.name.clone())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(kind_icon(&doc)).size(48.0));
                ui.add_space(8.0);
                if let Some(mime) = &doc.mime_type {
                    ui.label(format!("Type: {}", mime));
                }
                if let Some(size) = doc.size {
                    ui.label(format!("Size: {}", file_size::format_size(size)));
                }
                ui.label(format!("Location: {}", doc.uri.display()));
            });
        if !open {
            self.preview = None;
        }
    }
}
