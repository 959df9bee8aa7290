use crossterm::event::DisableFocusChange;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableFocusChange;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui_dropdown::crossterm_input::input_event_from_crossterm;
use ratatui_dropdown::input::InputEvent;
use ratatui_dropdown::select::SelectAction;
use ratatui_dropdown::select::SelectItem;
use ratatui_dropdown::select::SelectView;
use ratatui_dropdown::select::SelectViewOptions;
use ratatui_dropdown::select::Selection;
use ratatui_dropdown::theme::Theme;
use std::io;
use std::time::Duration;

struct Pane {
    title: &'static str,
    view: SelectView,
    selection: Selection,
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let items = vec![
        SelectItem::new("Red", 1),
        SelectItem::new("Blue", 2),
        SelectItem::new("Green", 3),
        SelectItem::new("Yellow", 4),
        SelectItem::new("Purple", 5),
    ];

    let mut panes = [
        Pane {
            title: "single (Tab to switch, q to quit)",
            view: SelectView::with_options(
                items.clone(),
                SelectViewOptions {
                    placeholder: "Pick a color".to_string(),
                    ..SelectViewOptions::default()
                },
            ),
            selection: Selection::single(),
        },
        Pane {
            title: "multiple",
            view: SelectView::new(items),
            selection: Selection::multiple(),
        },
    ];
    let mut focused = 0usize;

    let res = run(&mut terminal, &theme, &mut panes, &mut focused);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    panes: &mut [Pane; 2],
    focused: &mut usize,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [first, second, _, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(8),
                    Constraint::Length(8),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .areas(area);

            let buf = f.buffer_mut();
            for (pane, pane_area) in panes.iter_mut().zip([first, second]) {
                let marker = Span::styled(pane.title, theme.text_muted);
                buf.set_span(pane_area.x, pane_area.y, &marker, pane_area.width);
                let widget_area = ratatui::layout::Rect::new(
                    pane_area.x,
                    pane_area.y + 1,
                    pane_area.width,
                    pane_area.height.saturating_sub(1),
                );
                pane.view.render(widget_area, buf, theme, &pane.selection);
            }

            let status_line = format!(
                "single={}  multiple={}",
                describe(&panes[0].selection),
                describe(&panes[1].selection),
            );
            let status_span = Span::styled(status_line, Style::default());
            buf.set_span(status.x, status.y, &status_span, status.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;

        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press {
                if matches!(key.code, KeyCode::Char('q')) {
                    return Ok(());
                }
                if matches!(key.code, KeyCode::Tab) {
                    panes[*focused].view.blur();
                    *focused = (*focused + 1) % panes.len();
                    continue;
                }
            }
        }

        let Some(input) = input_event_from_crossterm(ev) else {
            continue;
        };
        match input {
            // Keys go to the focused pane only; mouse events hit-test against every pane.
            InputEvent::Key(_) | InputEvent::FocusLost => {
                apply(&mut panes[*focused], input);
            }
            InputEvent::Mouse(_) => {
                for pane in panes.iter_mut() {
                    apply(pane, input);
                }
            }
        }
    }
}

fn apply(pane: &mut Pane, input: InputEvent) {
    if let SelectAction::Changed(next) = pane.view.handle_event(input, &pane.selection) {
        pane.selection = next;
    }
}

fn describe(selection: &Selection) -> String {
    match selection {
        Selection::Single(None) => "(none)".to_string(),
        Selection::Single(Some(item)) => item.label.clone(),
        Selection::Multiple(members) if members.is_empty() => "(none)".to_string(),
        Selection::Multiple(members) => members
            .iter()
            .map(|m| m.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
