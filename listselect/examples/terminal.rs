//! Interactive demo: drive the selection cursor with the arrow keys (or
//! j/k) in an alternate-screen terminal. Enter accepts the selected item,
//! q or Escape cancels.

use std::fs::File;
use std::io::{Write, stdout};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use listselect::{ListSelect, MonoFont, MonoLabel, TextLabel};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("terminal.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // One display pixel per terminal cell, so label geometry reads directly
    // in rows and columns
    let mut list_select: ListSelect<MonoLabel> = ListSelect::builder(MonoFont::CELL)
        .items(["First", "Second", "Third", "Fourth"])
        .build();
    list_select.set_anchored_position((4, 2));

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let accepted = run(&mut list_select);

    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    match accepted? {
        Some(item) => println!("accepted: {item}"),
        None => println!("cancelled"),
    }
    Ok(())
}

fn run(list_select: &mut ListSelect<MonoLabel>) -> std::io::Result<Option<String>> {
    loop {
        draw(list_select)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up | KeyCode::Char('k') => list_select.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => list_select.move_selection_down(),
                KeyCode::Enter => {
                    return Ok(list_select.selected_item().ok().map(String::from));
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                _ => {}
            },
            _ => {}
        }
    }
}

/// Redraw the rendered rows at the label's resolved origin, plus a status
/// line underneath.
fn draw(list_select: &ListSelect<MonoLabel>) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, terminal::Clear(ClearType::All))?;

    let (x, y) = list_select.label().origin();
    for (row, line) in list_select.label().text().lines().enumerate() {
        queue!(out, cursor::MoveTo(x as u16, y as u16 + row as u16))?;
        write!(out, "{line}")?;
    }

    let status_row = y as u16 + list_select.height() as u16 + 1;
    queue!(out, cursor::MoveTo(0, status_row))?;
    match list_select.selected_item() {
        Ok(item) => write!(
            out,
            "selected: {item}  (arrows/jk move, Enter accepts, q quits)"
        )?,
        Err(err) => write!(out, "{err}")?,
    }

    out.flush()
}
