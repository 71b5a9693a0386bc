use crate::terminal::Terminal;
use crossterm::style::Color;

/// Key bindings shown by `?` in the globe view
pub const GLOBE_HELP: &str = "\
PULSEGLOBE
─────────────────
↑/k    Pitch up
↓/j    Pitch down
←/→    Spin slower/faster
+/-    Zoom in/out
0      Reset zoom
Space  Pause/resume
1-9    Frame delay (1=fast)
!@#$)  Color scheme
?      Toggle help
q/Esc  Quit";

/// Draw a centered box around `help_text` into the back buffer.
pub fn render_help_overlay(term: &mut Terminal, help_text: &str) {
    if help_text.is_empty() {
        return;
    }
    let (width, height) = term.size();

    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4;
    let box_height = lines.len() + 2;

    let left = (width as usize).saturating_sub(box_width) as i32 / 2;
    let top = (height as usize).saturating_sub(box_height) as i32 / 2;
    let right = left + box_width as i32 - 1;
    let bottom = top + box_height as i32 - 1;

    let border = Some(Color::White);
    let text = Some(Color::Grey);

    for x in left + 1..right {
        term.set(x, top, '─', border, false);
        term.set(x, bottom, '─', border, false);
    }
    term.set(left, top, '┌', border, false);
    term.set(right, top, '┐', border, false);
    term.set(left, bottom, '└', border, false);
    term.set(right, bottom, '┘', border, false);

    for (i, line) in lines.iter().enumerate() {
        let y = top + 1 + i as i32;
        let padding = max_width.saturating_sub(line.chars().count());
        term.set(left, y, '│', border, false);
        term.set_str(left + 1, y, &format!(" {}{} ", line, " ".repeat(padding)), text, false);
        term.set(right, y, '│', border, false);
    }
}
