use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    celebration::Celebration,
    game::{Status, PLACEHOLDER},
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

const HEART: &str = "♥";
const EMPTY_HEART: &str = "♡";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.game;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2), // title
                Constraint::Min(1),    // padding
                Constraint::Length(2), // word
                Constraint::Length(1), // chances
                Constraint::Length(1), // letters tried
                Constraint::Length(3), // status
                Constraint::Length(1), // notice
                Constraint::Length(1), // input
                Constraint::Min(1),    // padding
                Constraint::Length(1), // legend
            ])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Word Guessing Game",
                bold_style.fg(Color::Magenta),
            )),
            Line::from(Span::styled(
                format!(
                    "Guess the hidden word! You have {} chances to find it.",
                    game.max_chances()
                ),
                italic_style,
            )),
        ])
        .alignment(Alignment::Center);
        title.render(chunks[0], buf);

        let word_style = match game.status() {
            Status::Active => bold_style,
            Status::Won => bold_style.fg(Color::Green),
            Status::Lost => bold_style.fg(Color::Red),
        };
        let letters = Itertools::intersperse(
            game.reveal_mask().iter().map(|&c| {
                if c == PLACEHOLDER {
                    Span::styled(c.to_string(), dim_style)
                } else {
                    Span::styled(c.to_string(), word_style)
                }
            }),
            Span::raw(" "),
        )
        .collect::<Vec<Span>>();
        let masked_width = game.masked_word().width();
        Paragraph::new(Line::from(letters))
            .alignment(if masked_width < chunks[2].width as usize {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);

        let lost = game.max_chances().saturating_sub(game.chances_remaining()) as usize;
        let chances = Line::from(vec![
            Span::styled(format!("Chances left: {}  ", game.chances_remaining()), bold_style),
            Span::styled(
                HEART.repeat(game.chances_remaining() as usize),
                Style::default().fg(Color::Red),
            ),
            Span::styled(EMPTY_HEART.repeat(lost), dim_style),
        ]);
        Paragraph::new(chances)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        if !game.guessed_letters().is_empty() {
            Paragraph::new(Span::styled(
                format!("Tried: {}", game.guessed_letters().iter().join(" ")),
                dim_style,
            ))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
        }

        let status_color = match game.status() {
            Status::Active => Color::Cyan,
            Status::Won => Color::Green,
            Status::Lost => Color::Red,
        };
        Paragraph::new(Span::styled(game.status_message(), bold_style))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(status_color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[5], buf);

        if let Some(notice) = &self.notice {
            Paragraph::new(Span::styled(
                notice.as_str(),
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
        }

        if !game.is_over() {
            let input = Line::from(vec![
                Span::styled("Enter a letter or the full word: ", italic_style),
                Span::styled(self.input.as_str(), bold_style),
                Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]);
            Paragraph::new(input)
                .alignment(Alignment::Center)
                .render(chunks[7], buf);
        }

        let legend = if game.is_over() {
            "(enter/r) new game / (q/esc)ape"
        } else {
            "(enter) guess / (ctrl+r) new game / (esc)ape"
        };
        Paragraph::new(Span::styled(legend, italic_style)).render(chunks[9], buf);

        if self.celebration.is_active {
            render_celebration(&self.celebration, area, buf);
        }
    }
}

/// Draw balloons and the cheer banner over whatever is on screen
fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::LightYellow,
    ];

    for particle in &celebration.particles {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let x = particle.x as u16;
        let y = particle.y as u16;
        if x >= area.width || y >= area.height {
            continue;
        }

        let color = colors[particle.color_index % colors.len()];
        let fade = 1.0 - (particle.age / particle.max_age);
        let style = if particle.is_text || fade > 0.6 {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else if fade > 0.25 {
            Style::default().fg(color)
        } else {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        };

        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(&particle.symbol.to_string());
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::FixedVocabulary;
    use crate::word_generator::{WordGenConfig, WordGenerator};
    use rand::{rngs::StdRng, SeedableRng};

    fn create_test_app(word: &str) -> App {
        App::new(
            WordGenerator::new(WordGenConfig::default()),
            Box::new(FixedVocabulary::new(["lamp"])),
            StdRng::seed_from_u64(0),
            Some(word),
        )
        .unwrap()
    }

    fn rendered(app: &App, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_placeholders_and_greeting() {
        let app = create_test_app("chair");
        let screen = rendered(&app, Rect::new(0, 0, 80, 24));

        assert!(screen.contains("_ _ _ _ _"));
        assert!(screen.contains("Let's begin!"));
        assert!(screen.contains("Chances left: 7"));
        assert!(!screen.contains("Tried:"));
    }

    #[test]
    fn test_renders_progress_and_tried_letters() {
        let mut app = create_test_app("chair");
        app.input = "c".into();
        app.submit();
        app.input = "z".into();
        app.submit();

        let screen = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(screen.contains("c _ _ _ _"));
        assert!(screen.contains("Chances left: 6"));
        assert!(screen.contains("Tried: c z"));
    }

    #[test]
    fn test_renders_input_line() {
        let mut app = create_test_app("chair");
        app.input = "ab".into();

        let screen = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(screen.contains("Enter a letter or the full word: ab"));
    }

    #[test]
    fn test_renders_notice() {
        let mut app = create_test_app("chair");
        app.submit();

        let screen = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(screen.contains("Please enter a guess"));
    }

    #[test]
    fn test_renders_loss_with_secret() {
        let mut app = App::new(
            WordGenerator::new(WordGenConfig::default()),
            Box::new(FixedVocabulary::new(["lamp"])),
            StdRng::seed_from_u64(0),
            Some("kite"),
        )
        .unwrap();
        for c in ["q", "w", "x", "y", "z", "b", "c"] {
            app.input = c.into();
            app.submit();
        }
        assert!(app.game.is_over());

        let screen = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(screen.contains("k i t e"));
        assert!(screen.contains("The word was kite"));
        assert!(screen.contains("new game"));
        assert!(!screen.contains("Enter a letter"));
    }

    #[test]
    fn test_renders_at_extreme_sizes() {
        let app = create_test_app("imagination");

        for area in [
            Rect::new(0, 0, 10, 5),
            Rect::new(0, 0, 200, 5),
            Rect::new(0, 0, 20, 50),
            Rect::new(0, 0, 300, 100),
        ] {
            let mut buffer = Buffer::empty(area);
            (&app).render(area, &mut buffer);
            assert!(*buffer.area() == area);
        }
    }

    #[test]
    fn test_celebration_renders_over_win() {
        let mut app = create_test_app("kite");
        app.input = "kite".into();
        app.submit();
        assert!(app.celebration.is_active);

        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        assert!(!buffer.content().is_empty());
    }

    #[test]
    fn test_ui_constants_consistency() {
        const _: () = assert!(HORIZONTAL_MARGIN * 2 < 80);
        const _: () = assert!(VERTICAL_MARGIN * 2 < 24);
    }
}
