//! Модуль пользовательского интерфейса

mod dictionary_view;

use crate::app::App;
use dota_dictionary::i18n::Language;
use eframe::egui;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Обрабатываем события от сетевых задач
        self.process_events();

        // Пока идут запросы - перерисовка раз в полсекунды
        if self.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        // Нижняя панель с логом (фиксированная высота)
        self.render_log_panel(ctx);

        // Основная панель (занимает оставшееся место)
        self.render_main_panel(ctx);
    }
}

impl App {
    fn render_log_panel(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(60.0)
            .default_height(100.0)
            .max_height(300.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(t.log);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(t.clear).clicked() {
                            self.log_messages.clear();
                        }
                    });
                });

                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_messages {
                            ui.label(msg);
                        }
                        if self.log_messages.is_empty() {
                            ui.colored_label(egui::Color32::GRAY, t.log_empty);
                        }
                    });
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Кнопки выбора языка вверху
            self.render_language_selector(ui);

            ui.separator();
            ui.add_space(5.0);

            self.render_dictionary(ui);
        });
    }

    fn render_language_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("🌐");
            for lang in Language::all() {
                let text = format!("{} {}", lang.flag(), lang.native_name());
                let selected = self.language == *lang;

                if ui.selectable_label(selected, text).clicked() {
                    self.language = *lang;
                }
            }
        });
    }
}
