use crate::app::App;
use crate::ui::screens::dashboard::render_dashboard;
use crate::ui::screens::help::render_help_popup;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    render_dashboard(app, f);

    if app.show_help {
        render_help_popup(f);
    }
}
