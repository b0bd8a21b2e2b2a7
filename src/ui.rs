use ratatui::{
    buffer::Buffer,
    layout::{self, Alignment, Constraint, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use snekrs_levels::{Collision, Direction, Session};

use crate::app::{App, Screen};

/// Draws a session's cells into the inner area of its bordered box.
pub struct Board<'a> {
    session: &'a Session,
}

impl<'a> Board<'a> {
    pub fn new(session: &'a Session) -> Self {
        Board { session }
    }

    fn head_symbol(&self) -> &'static str {
        match self.session.direction() {
            Direction::Up => "^",
            Direction::Down => "v",
            Direction::Left => "<",
            Direction::Right => ">",
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Cells that don't fit in a small terminal are clipped.
        let cell = |x: i32, y: i32| -> Option<(u16, u16)> {
            let (x, y) = (u16::try_from(x).ok()?, u16::try_from(y).ok()?);
            (x < area.width && y < area.height).then(|| (area.x + x, area.y + y))
        };

        let apple = self.session.apple_position();
        if let Some(pos) = cell(apple.x, apple.y) {
            buf[pos].set_symbol("●").set_fg(Color::LightRed);
        }

        for segment in self.session.snake_segments().skip(1) {
            if let Some(pos) = cell(segment.x, segment.y) {
                buf[pos].set_symbol(" ").set_bg(Color::Green);
            }
        }

        let head = self.session.snake_head();
        if let Some(pos) = cell(head.x, head.y) {
            buf[pos]
                .set_symbol(self.head_symbol())
                .set_fg(Color::Yellow)
                .set_bg(Color::Green);
        }
    }
}

/// The bordered box for the board, centred in `outer` and clipped to it.
fn board_rect(session: &Session, outer: Rect) -> Rect {
    let playable = session.playable_area();
    let width = (playable.width.max(0) as u16).saturating_add(2).min(outer.width);
    let height = (playable.height.max(0) as u16).saturating_add(2).min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

fn render_session(frame: &mut Frame, session: &Session, title: String, outer: Rect) -> Rect {
    let rect = board_rect(session, outer);
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(rect);

    frame.render_widget(block, rect);
    frame.render_widget(Board::new(session), inner);
    inner
}

pub fn render(app: &App, frame: &mut Frame) {
    let score_text = match &app.screen {
        Screen::Playing(session)
        | Screen::Paused(session)
        | Screen::Won(session)
        | Screen::Lost(session) => format!(
            "SNEK    High Score: {}    Score: {}    Level: {}    {}",
            app.high_score,
            session.score(),
            session.level(),
            session.difficulty().label()
        ),
        _ => format!("SNEK    High Score: {}", app.high_score),
    };

    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + scores
            Constraint::Min(0),    // Game area
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(score_text)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    match &app.screen {
        Screen::Menu => {
            frame.render_widget(
                Paragraph::new(format!(
                    "SPACE to play\nD to change difficulty: {}\nESC to quit",
                    app.difficulty.label()
                ))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                layout[1],
            );
        }
        Screen::LevelSelect(selected) => {
            let lines: Vec<String> = (1..=app.levels().level_count())
                .map(|level| {
                    let marker = if level as u32 == *selected { ">" } else { " " };
                    format!("{} Level {}", marker, level)
                })
                .collect();
            frame.render_widget(
                Paragraph::new(format!(
                    "Choose a level (UP/DOWN + ENTER, or its number)\n\n{}\n\nESC for the menu",
                    lines.join("\n")
                ))
                .alignment(Alignment::Center)
                .block(Block::default().title(" Levels ").borders(Borders::ALL)),
                layout[1],
            );
        }
        Screen::Playing(session) => {
            render_session(frame, session, format!(" Level {} ", session.level()), layout[1]);
        }
        Screen::Paused(session) => {
            render_session(
                frame,
                session,
                " Paused. Press SPACE to continue ".to_string(),
                layout[1],
            );
        }
        Screen::Won(session) => {
            let inner = render_session(frame, session, " Won ".to_string(), layout[1]);
            frame.render_widget(
                Paragraph::new(format!(
                    "LEVEL {} WON\nScore: {}\nENTER for the next level",
                    session.level(),
                    session.score()
                ))
                .alignment(Alignment::Center)
                .green(),
                inner,
            );
        }
        Screen::Lost(session) => {
            let inner = render_session(frame, session, " Lost ".to_string(), layout[1]);
            let cause = match session.collision() {
                Some(Collision::Wall) => "Hit the wall",
                Some(Collision::SelfCollision) => "Bit your own tail",
                None => "Gave up",
            };
            frame.render_widget(
                Paragraph::new(format!(
                    "GAME OVER\n{}\nFinal Score: {}\nENTER for the menu",
                    cause,
                    session.score()
                ))
                .alignment(Alignment::Center)
                .red(),
                inner,
            );
        }
        Screen::Exit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snekrs_levels::{Difficulty, PlayableArea};

    #[test]
    fn test_board_draws_head_and_apple() {
        let session = Session::new(PlayableArea::new(10, 10), Difficulty::Normal, 1, Some(4)).unwrap();
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);

        Board::new(&session).render(area, &mut buf);

        let head = session.snake_head();
        assert_eq!(buf[(head.x as u16, head.y as u16)].symbol(), ">");
        let apple = session.apple_position();
        assert_eq!(buf[(apple.x as u16, apple.y as u16)].symbol(), "●");
    }

    #[test]
    fn test_board_clips_to_small_area() {
        let session = Session::new(PlayableArea::new(10, 10), Difficulty::Normal, 1, Some(4)).unwrap();
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);

        // Head sits at (5,5), outside the 3x3 buffer; must not panic.
        Board::new(&session).render(area, &mut buf);
    }

    #[test]
    fn test_board_rect_is_centred() {
        let session = Session::new(PlayableArea::new(10, 10), Difficulty::Normal, 1, Some(4)).unwrap();

        let rect = board_rect(&session, Rect::new(0, 3, 40, 20));
        assert_eq!(rect, Rect::new(14, 7, 12, 12));

        let clipped = board_rect(&session, Rect::new(0, 0, 5, 5));
        assert_eq!(clipped, Rect::new(0, 0, 5, 5));
    }
}
