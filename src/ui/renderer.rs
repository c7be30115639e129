use crate::core::field::{Field, FieldKind, FieldVisual};
use crate::core::feedback::Tone;
use crate::core::form::Form;
use crate::page::{FocusRef, Page, PageButton};
use crate::ui::span::{Span, SpanLine, plain};
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthChar;

const HINT_LINE: &str = "Tab next · Shift-Tab prev · Enter submit · ←/→ choose · Esc quit";

pub fn render(page: &Page, focused: Option<&FocusRef>, width: u16) -> Vec<SpanLine> {
    let mut lines: Vec<SpanLine> = Vec::new();

    lines.push(vec![Span::styled("marquee", Style::new().bold())]);
    lines.push(vec![Span::styled(
        HINT_LINE,
        Style::new().color(Color::DarkGrey),
    )]);
    lines.push(Vec::new());

    for form in page.forms() {
        render_form(&mut lines, form, focused);
        lines.push(Vec::new());
    }

    let buttons: Vec<&PageButton> = page.buttons().collect();
    if !buttons.is_empty() {
        lines.push(vec![Span::styled(
            "Watchlist",
            Style::new().color(Color::Cyan).bold(),
        )]);
        for button in buttons {
            let is_focused = matches!(
                focused,
                Some(FocusRef::Button { id }) if id == button.id()
            );
            lines.push(button_line(
                button.label(),
                is_focused,
                button.is_disabled(),
                button.has_class("active"),
            ));
        }
        lines.push(Vec::new());
    }

    if let Some(status) = page.status() {
        lines.push(vec![Span::styled(
            status,
            Style::new().color(Color::DarkGrey),
        )]);
    }

    lines
        .into_iter()
        .map(|line| clip_line(line, width as usize))
        .collect()
}

fn render_form(lines: &mut Vec<SpanLine>, form: &Form, focused: Option<&FocusRef>) {
    let title = if form.title().is_empty() {
        form.id().as_str()
    } else {
        form.title()
    };
    lines.push(vec![Span::styled(
        title,
        Style::new().color(Color::Cyan).bold(),
    )]);

    for field in form.fields() {
        if field.kind() == &FieldKind::Hidden {
            continue;
        }
        let is_focused = matches!(
            focused,
            Some(FocusRef::Field { form: f, name }) if f == form.id() && name.as_str() == field.name()
        );
        lines.push(field_line(field, is_focused));
    }

    if form.feedback().is_visible() {
        let style = match form.feedback().tone() {
            Tone::Error => Style::new().color(Color::Red),
            Tone::Success => Style::new().color(Color::Green),
            Tone::Neutral => Style::new(),
        };
        lines.push(vec![
            Span::new("  "),
            Span::styled(form.feedback().message(), style),
        ]);
    }

    let control_focused = matches!(
        focused,
        Some(FocusRef::Control { form: f }) if f == form.id()
    );
    lines.push(button_line(
        form.control().label(),
        control_focused,
        form.control().is_disabled(),
        false,
    ));
}

fn field_line(field: &Field, focused: bool) -> SpanLine {
    let marker = if focused { "> " } else { "  " };

    let mut line = vec![Span::new(marker)];
    line.push(Span::new(format!("{}: ", field.label())));

    let value_span = match field.kind() {
        FieldKind::Password => Span::new("*".repeat(field.value().chars().count())),
        FieldKind::Select { .. } if field.value().is_empty() => Span::styled(
            field.placeholder().unwrap_or("(choose)"),
            Style::new().color(Color::DarkGrey),
        ),
        _ if field.value().is_empty() => Span::styled(
            field.placeholder().unwrap_or_default(),
            Style::new().color(Color::DarkGrey),
        ),
        _ => Span::new(field.value()),
    };
    line.push(value_span);

    if field.visual() == FieldVisual::Error {
        for span in &mut line {
            span.style = span.style.color(Color::Red);
        }
    }
    if field.is_disabled() {
        for span in &mut line {
            span.style = Style::new().color(Color::DarkGrey).dim();
        }
    }

    line
}

fn button_line(label: &str, focused: bool, disabled: bool, active: bool) -> SpanLine {
    let style = if disabled {
        Style::new().color(Color::DarkGrey).dim()
    } else if focused {
        Style::new().color(Color::White).background(Color::Blue).bold()
    } else if active {
        Style::new().color(Color::Green)
    } else {
        Style::new().color(Color::DarkGrey)
    };

    let marker = if focused { "> " } else { "  " };
    vec![Span::new(marker), Span::styled(format!("[ {label} ]"), style)]
}

/// Truncate a line to the terminal width, counting display columns.
fn clip_line(line: SpanLine, max_width: usize) -> SpanLine {
    let mut used = 0usize;
    let mut clipped: SpanLine = Vec::new();

    for span in line {
        if used >= max_width {
            break;
        }
        let mut text = String::new();
        for ch in span.text.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + ch_width > max_width {
                break;
            }
            used += ch_width;
            text.push(ch);
        }
        if !text.is_empty() {
            clipped.push(Span::styled(text, span.style));
        }
    }

    if clipped.is_empty() {
        return plain("");
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::{clip_line, render};
    use crate::core::field::Field;
    use crate::core::form::Form;
    use crate::page::{FocusRef, Page};
    use crate::ui::span::{Span, SpanLine};

    fn line_text(line: &SpanLine) -> String {
        line.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn clip_line_counts_display_columns() {
        let line = vec![Span::new("abcdef")];
        let clipped = clip_line(line, 4);
        assert_eq!(line_text(&clipped), "abcd");
    }

    #[test]
    fn focused_field_carries_the_marker() {
        let mut page = Page::new();
        page.add_form(
            Form::new("login-form", "/login")
                .with_title("Sign in")
                .with_field(Field::text("email", "Email")),
        );

        let focus = FocusRef::Field {
            form: "login-form".into(),
            name: "email".to_string(),
        };
        let lines = render(&page, Some(&focus), 80);
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert!(rendered.iter().any(|line| line.starts_with("> Email:")));
    }

    #[test]
    fn hidden_fields_are_not_rendered() {
        let mut page = Page::new();
        page.add_form(
            Form::new("rating-1", "/rate")
                .with_field(Field::hidden("movie_id", "1"))
                .with_field(Field::select("rating", "Rating", vec!["1".to_string()])),
        );

        let lines = render(&page, None, 80);
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert!(!rendered.iter().any(|line| line.contains("movie_id")));
        assert!(rendered.iter().any(|line| line.contains("Rating:")));
    }
}
