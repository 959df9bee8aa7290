use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Identity key of a selectable item. Items with equal keys are the same logical option,
/// regardless of how or where they were constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectItem {
    pub label: String,
    pub value: Value,
}

impl SelectItem {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Caller-owned selection state. The variant is the operating mode: a single optional item,
/// or an ordered, duplicate-free list of items. Membership is decided by [`Value`] key, so
/// independently constructed items with equal keys match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SelectItem>),
    Multiple(Vec<SelectItem>),
}

impl Selection {
    pub fn single() -> Self {
        Self::Single(None)
    }

    pub fn multiple() -> Self {
        Self::Multiple(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(current) => current.is_none(),
            Self::Multiple(members) => members.is_empty(),
        }
    }

    pub fn contains(&self, item: &SelectItem) -> bool {
        match self {
            Self::Single(current) => current.as_ref().is_some_and(|c| c.value == item.value),
            Self::Multiple(members) => members.iter().any(|m| m.value == item.value),
        }
    }

    /// Empty selection of the same mode.
    pub fn cleared(&self) -> Self {
        match self {
            Self::Single(_) => Self::Single(None),
            Self::Multiple(_) => Self::Multiple(Vec::new()),
        }
    }

    /// The selection after the user picks `item`, or `None` when picking it changes nothing
    /// (single mode, same key). Multiple mode removes a member or appends a non-member.
    pub fn toggled(&self, item: &SelectItem) -> Option<Self> {
        match self {
            Self::Single(current) => {
                if current.as_ref().is_some_and(|c| c.value == item.value) {
                    None
                } else {
                    Some(Self::Single(Some(item.clone())))
                }
            }
            Self::Multiple(members) => {
                if members.iter().any(|m| m.value == item.value) {
                    Some(Self::Multiple(
                        members
                            .iter()
                            .filter(|m| m.value != item.value)
                            .cloned()
                            .collect(),
                    ))
                } else {
                    let mut next = members.clone();
                    next.push(item.clone());
                    Some(Self::Multiple(next))
                }
            }
        }
    }
}

/// What the caller should do after feeding an event to the widget.
///
/// `Changed` carries the complete next selection; the widget never mutates the caller's
/// value. At most one `Changed` is emitted per input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectAction {
    None,
    Redraw,
    Changed(Selection),
}

#[derive(Clone, Debug)]
pub struct SelectViewOptions {
    pub style: Style,
    /// Shown in the value region when a single-mode selection is empty.
    pub placeholder: String,
    pub badge_style: Style,
    pub highlight_style: Style,
    pub selected_style: Style,
    pub clear_style: Style,
    pub max_list_height: u16,
}

impl Default for SelectViewOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            placeholder: String::new(),
            badge_style: Style::default().add_modifier(Modifier::REVERSED),
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            selected_style: Style::default().add_modifier(Modifier::BOLD),
            clear_style: Style::default(),
            max_list_height: 8,
        }
    }
}

/// Interactive regions recorded by the last render. Mouse dispatch is pure hit-testing
/// against these, so handlers always act on current state and there is nothing to
/// subscribe or tear down.
#[derive(Clone, Debug, Default)]
struct HitRegions {
    control: Rect,
    clear: Rect,
    /// Badge rect and its index into the `Multiple` members, in selection order.
    badges: Vec<(Rect, usize)>,
    /// Visible list row rect and its index into the item list. Empty while closed.
    rows: Vec<(Rect, usize)>,
}

/// Dropdown select control.
///
/// Owns only transient UI state: the open flag and the highlighted row. The selection is
/// the caller's; pass it into [`SelectView::handle_event`] and [`SelectView::render`], and
/// store the selection carried by [`SelectAction::Changed`].
#[derive(Clone, Debug)]
pub struct SelectView {
    items: Vec<SelectItem>,
    options: SelectViewOptions,
    open: bool,
    highlighted: usize,
    regions: HitRegions,
}

impl SelectView {
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            items,
            options: SelectViewOptions::default(),
            open: false,
            highlighted: 0,
            regions: HitRegions::default(),
        }
    }

    pub fn with_options(items: Vec<SelectItem>, options: SelectViewOptions) -> Self {
        Self {
            options,
            ..Self::new(items)
        }
    }

    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<SelectItem>) {
        self.items = items;
        if self.highlighted >= self.items.len() {
            self.highlighted = 0;
        }
        // Row regions index into the old list; drop them until the next render.
        self.regions.rows.clear();
    }

    pub fn options(&self) -> &SelectViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SelectViewOptions) {
        self.options = options;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Opens the list. The highlight resets to the first row on every closed-to-open
    /// transition.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.highlighted = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Focus loss: close without touching the selection.
    pub fn blur(&mut self) {
        self.close();
    }

    /// Hover path: point the highlight at `index` if it names an item.
    pub fn set_highlighted(&mut self, index: usize) {
        if index < self.items.len() {
            self.highlighted = index;
        }
    }

    pub fn handle_event(&mut self, event: InputEvent, selection: &Selection) -> SelectAction {
        match event {
            InputEvent::Key(key) => self.handle_key(key, selection),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, selection),
            InputEvent::FocusLost => {
                if self.open {
                    self.close();
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, selection: &Selection) -> SelectAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let was_open = self.open;
                self.toggle();
                if was_open {
                    if let Some(next) = self.committed(self.highlighted, selection) {
                        return SelectAction::Changed(next);
                    }
                }
                SelectAction::Redraw
            }
            KeyCode::Up | KeyCode::Down => {
                if !self.open {
                    self.open();
                    return SelectAction::Redraw;
                }
                let delta = if key.code == KeyCode::Down { 1 } else { -1 };
                self.move_highlight(delta)
            }
            KeyCode::Esc => {
                if self.open {
                    self.close();
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                }
            }
            _ => SelectAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, selection: &Selection) -> SelectAction {
        let pos = Position::new(mouse.x, mouse.y);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The clear glyph and badges swallow the click: no open/close toggle.
                if self.regions.clear.contains(pos) {
                    return SelectAction::Changed(selection.cleared());
                }
                if let Some(member) = self.badge_at(pos, selection) {
                    return match selection.toggled(&member) {
                        Some(next) => SelectAction::Changed(next),
                        None => SelectAction::None,
                    };
                }
                if self.open {
                    if let Some(index) = self.row_at(pos) {
                        let committed = self.committed(index, selection);
                        self.close();
                        return match committed {
                            Some(next) => SelectAction::Changed(next),
                            None => SelectAction::Redraw,
                        };
                    }
                }
                if self.regions.control.contains(pos) {
                    self.toggle();
                    return SelectAction::Redraw;
                }
                if self.open {
                    self.close();
                    return SelectAction::Redraw;
                }
                SelectAction::None
            }
            MouseEventKind::Moved => {
                if self.open {
                    if let Some(index) = self.row_at(pos) {
                        if index != self.highlighted {
                            self.highlighted = index;
                            return SelectAction::Redraw;
                        }
                    }
                }
                SelectAction::None
            }
            MouseEventKind::ScrollDown if self.open && self.row_at(pos).is_some() => {
                self.move_highlight(1)
            }
            MouseEventKind::ScrollUp if self.open && self.row_at(pos).is_some() => {
                self.move_highlight(-1)
            }
            _ => SelectAction::None,
        }
    }

    /// Moves the highlight by `delta` only when the result stays in range; out-of-range
    /// moves are ignored, not clamped.
    fn move_highlight(&mut self, delta: i64) -> SelectAction {
        let next = self.highlighted as i64 + delta;
        if next >= 0 && (next as usize) < self.items.len() {
            self.highlighted = next as usize;
            SelectAction::Redraw
        } else {
            SelectAction::None
        }
    }

    fn committed(&self, index: usize, selection: &Selection) -> Option<Selection> {
        self.items
            .get(index)
            .and_then(|item| selection.toggled(item))
    }

    fn badge_at(&self, pos: Position, selection: &Selection) -> Option<SelectItem> {
        let Selection::Multiple(members) = selection else {
            return None;
        };
        self.regions
            .badges
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .and_then(|(_, i)| members.get(*i))
            .cloned()
    }

    fn row_at(&self, pos: Position) -> Option<usize> {
        self.regions
            .rows
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, i)| *i)
    }

    /// Draws the control row at the top of `area` and, while open, the option list below it.
    /// Also records the hit regions used by mouse dispatch; a closed widget records no list
    /// rows, so the hidden list is neither visible nor clickable.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, selection: &Selection) {
        self.regions = HitRegions::default();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        let badge_style = self.options.badge_style.patch(theme.accent);
        let highlight_style = self.options.highlight_style.patch(theme.accent);
        let selected_style = self.options.selected_style.patch(theme.accent);
        let clear_style = if self.options.clear_style == Style::default() {
            theme.danger
        } else {
            self.options.clear_style
        };

        let control = Rect::new(area.x, area.y, area.width, 1);
        self.regions.control = control;
        buf.set_style(control, base_style);

        // Right edge of the control row: clear glyph, divider, caret. Narrow areas drop
        // the affordances and give the whole row to the value.
        let value_w = if control.width >= 6 {
            let caret_x = control.x + control.width - 1;
            let divider_x = control.x + control.width - 3;
            let clear_x = control.x + control.width - 5;
            let caret = if self.open { "▴" } else { "▾" };
            buf.set_stringn(caret_x, control.y, caret, 1, base_style);
            buf.set_stringn(divider_x, control.y, "│", 1, theme.text_muted);
            buf.set_stringn(clear_x, control.y, "×", 1, clear_style);
            self.regions.clear = Rect::new(clear_x, control.y, 1, 1);
            control.width - 6
        } else {
            control.width
        };

        match selection {
            Selection::Single(current) => match current {
                Some(item) => {
                    render::render_str_clipped(
                        control.x,
                        control.y,
                        value_w,
                        buf,
                        &item.label,
                        base_style,
                    );
                }
                None => {
                    render::render_str_clipped(
                        control.x,
                        control.y,
                        value_w,
                        buf,
                        &self.options.placeholder,
                        theme.text_muted,
                    );
                }
            },
            Selection::Multiple(members) => {
                let mut x = control.x;
                let end = control.x + value_w;
                for (i, member) in members.iter().enumerate() {
                    if x >= end {
                        break;
                    }
                    let text = format!("{} ×", member.label);
                    let w = render::render_str_clipped(x, control.y, end - x, buf, &text, badge_style);
                    if w == 0 {
                        break;
                    }
                    self.regions.badges.push((Rect::new(x, control.y, w, 1), i));
                    x += w + 1;
                }
            }
        }

        if !self.open {
            return;
        }

        let visible = self
            .items
            .len()
            .min(self.options.max_list_height as usize)
            .min(area.height.saturating_sub(1) as usize);
        for (row, item) in self.items.iter().take(visible).enumerate() {
            let y = area.y + 1 + row as u16;
            let row_area = Rect::new(area.x, y, area.width, 1);

            // Selected and highlighted markers are independent and may co-occur.
            let mut style = base_style;
            if selection.contains(item) {
                style = style.patch(selected_style);
            }
            if row == self.highlighted {
                style = style.patch(highlight_style);
            }
            buf.set_style(row_area, style);
            render::render_str_clipped(
                row_area.x + 1,
                y,
                row_area.width.saturating_sub(1),
                buf,
                &item.label,
                style,
            );
            self.regions.rows.push((row_area, row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn click(x: u16, y: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            x,
            y,
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: crate::input::KeyModifiers::none(),
        })
    }

    fn hover(x: u16, y: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            x,
            y,
            kind: MouseEventKind::Moved,
            modifiers: crate::input::KeyModifiers::none(),
        })
    }

    fn colors() -> Vec<SelectItem> {
        vec![
            SelectItem::new("Red", 1),
            SelectItem::new("Blue", 2),
            SelectItem::new("Green", 3),
        ]
    }

    fn rendered(view: &mut SelectView, selection: &Selection) -> Buffer {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), selection);
        buf
    }

    #[test]
    fn toggling_membership_twice_restores_selection() {
        let view = SelectView::new(colors());
        let start = Selection::Multiple(vec![SelectItem::new("Red", 1)]);
        let blue = &view.items()[1];

        let added = start.toggled(blue).unwrap();
        assert!(added.contains(blue));
        let removed = added.toggled(blue).unwrap();
        assert_eq!(removed, start);
    }

    #[test]
    fn multiple_selection_stays_duplicate_free() {
        let start = Selection::Multiple(vec![SelectItem::new("Red", 1)]);
        // Same key, independently constructed: must match the member, not append.
        let other_red = SelectItem::new("Red (again)", 1);
        let next = start.toggled(&other_red).unwrap();
        assert_eq!(next, Selection::Multiple(Vec::new()));
    }

    #[test]
    fn single_mode_same_key_is_a_no_op() {
        let start = Selection::Single(Some(SelectItem::new("Red", 1)));
        assert_eq!(start.toggled(&SelectItem::new("Red", 1)), None);
        assert!(start.toggled(&SelectItem::new("Blue", 2)).is_some());
    }

    #[test]
    fn opening_resets_highlight() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        view.handle_event(key(KeyCode::Down), &selection);
        assert_eq!(view.highlighted(), 1);
        view.close();
        view.open();
        assert_eq!(view.highlighted(), 0);
    }

    #[test]
    fn arrows_open_first_then_move_with_range_guard() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();

        // Closed: first arrow only opens.
        assert_eq!(view.handle_event(key(KeyCode::Down), &selection), SelectAction::Redraw);
        assert!(view.is_open());
        assert_eq!(view.highlighted(), 0);

        // Up at the first row is ignored, not clamped-and-applied.
        assert_eq!(view.handle_event(key(KeyCode::Up), &selection), SelectAction::None);
        assert_eq!(view.highlighted(), 0);

        view.handle_event(key(KeyCode::Down), &selection);
        view.handle_event(key(KeyCode::Down), &selection);
        assert_eq!(view.highlighted(), 2);
        assert_eq!(view.handle_event(key(KeyCode::Down), &selection), SelectAction::None);
        assert_eq!(view.highlighted(), 2);
    }

    #[test]
    fn arrow_then_enter_commits_highlighted_and_closes() {
        // Single mode, empty value: ArrowDown opens, ArrowDown moves to "Blue",
        // Enter commits and closes.
        let mut view = SelectView::new(colors());
        let selection = Selection::single();

        view.handle_event(key(KeyCode::Down), &selection);
        view.handle_event(key(KeyCode::Down), &selection);
        let action = view.handle_event(key(KeyCode::Enter), &selection);
        assert_eq!(
            action,
            SelectAction::Changed(Selection::Single(Some(SelectItem::new("Blue", 2))))
        );
        assert!(!view.is_open());
    }

    #[test]
    fn enter_on_current_single_value_closes_without_change() {
        let mut view = SelectView::new(colors());
        let selection = Selection::Single(Some(SelectItem::new("Red", 1)));
        view.open();
        let action = view.handle_event(key(KeyCode::Enter), &selection);
        assert_eq!(action, SelectAction::Redraw);
        assert!(!view.is_open());
    }

    #[test]
    fn space_toggles_open_when_closed() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        assert_eq!(view.handle_event(key(KeyCode::Char(' ')), &selection), SelectAction::Redraw);
        assert!(view.is_open());
    }

    #[test]
    fn escape_closes_without_change() {
        let mut view = SelectView::new(colors());
        let selection = Selection::Multiple(vec![SelectItem::new("Red", 1)]);
        view.open();
        view.set_highlighted(2);
        assert_eq!(view.handle_event(key(KeyCode::Esc), &selection), SelectAction::Redraw);
        assert!(!view.is_open());
        assert_eq!(view.handle_event(key(KeyCode::Esc), &selection), SelectAction::None);
    }

    #[test]
    fn focus_loss_closes_without_change() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        assert_eq!(view.handle_event(InputEvent::FocusLost, &selection), SelectAction::Redraw);
        assert!(!view.is_open());
    }

    #[test]
    fn unhandled_keys_do_nothing() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        assert_eq!(view.handle_event(key(KeyCode::Char('x')), &selection), SelectAction::None);
        assert_eq!(view.handle_event(key(KeyCode::Tab), &selection), SelectAction::None);
        assert!(view.is_open());
    }

    #[test]
    fn enter_with_no_items_only_toggles() {
        let mut view = SelectView::new(Vec::new());
        let selection = Selection::single();
        view.open();
        assert_eq!(view.handle_event(key(KeyCode::Enter), &selection), SelectAction::Redraw);
        assert!(!view.is_open());
    }

    #[test]
    fn clicking_control_row_toggles_open() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        rendered(&mut view, &selection);

        assert_eq!(view.handle_event(click(2, 0), &selection), SelectAction::Redraw);
        assert!(view.is_open());
        rendered(&mut view, &selection);
        assert_eq!(view.handle_event(click(2, 0), &selection), SelectAction::Redraw);
        assert!(!view.is_open());
    }

    #[test]
    fn clicking_list_row_commits_and_closes() {
        // Multiple mode with "Red" selected: clicking the "Blue" row appends it
        // and closes the list.
        let mut view = SelectView::new(colors());
        let selection = Selection::Multiple(vec![SelectItem::new("Red", 1)]);
        view.open();
        rendered(&mut view, &selection);

        let action = view.handle_event(click(3, 2), &selection);
        assert_eq!(
            action,
            SelectAction::Changed(Selection::Multiple(vec![
                SelectItem::new("Red", 1),
                SelectItem::new("Blue", 2),
            ]))
        );
        assert!(!view.is_open());
    }

    #[test]
    fn clicking_clear_empties_selection_without_toggling() {
        let mut view = SelectView::new(colors());
        let selection = Selection::Multiple(vec![SelectItem::new("Red", 1)]);
        rendered(&mut view, &selection);

        // Clear glyph sits five columns from the right edge of a 30-wide control row.
        let action = view.handle_event(click(25, 0), &selection);
        assert_eq!(action, SelectAction::Changed(Selection::Multiple(Vec::new())));
        assert!(!view.is_open());

        // Unconditional: clearing an already empty selection still reports a change.
        let empty = Selection::single();
        let mut view = SelectView::new(colors());
        rendered(&mut view, &empty);
        assert_eq!(
            view.handle_event(click(25, 0), &empty),
            SelectAction::Changed(Selection::Single(None))
        );

        // Clear swallows the click in the open state too: the list stays open.
        let mut view = SelectView::new(colors());
        view.open();
        rendered(&mut view, &selection);
        assert_eq!(
            view.handle_event(click(25, 0), &selection),
            SelectAction::Changed(Selection::Multiple(Vec::new()))
        );
        assert!(view.is_open());
    }

    #[test]
    fn clicking_badge_removes_member_without_toggling() {
        // With [Red, Blue] selected, clicking the "Red" badge drops it and the list
        // stays closed.
        let mut view = SelectView::new(colors());
        let selection = Selection::Multiple(vec![
            SelectItem::new("Red", 1),
            SelectItem::new("Blue", 2),
        ]);
        rendered(&mut view, &selection);

        let action = view.handle_event(click(0, 0), &selection);
        assert_eq!(
            action,
            SelectAction::Changed(Selection::Multiple(vec![SelectItem::new("Blue", 2)]))
        );
        assert!(!view.is_open());
    }

    #[test]
    fn clicking_outside_open_list_closes_it() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        rendered(&mut view, &selection);

        assert_eq!(view.handle_event(click(2, 5), &selection), SelectAction::Redraw);
        assert!(!view.is_open());
    }

    #[test]
    fn hover_moves_highlight_only_over_visible_rows() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        rendered(&mut view, &selection);

        assert_eq!(view.handle_event(hover(4, 3), &selection), SelectAction::Redraw);
        assert_eq!(view.highlighted(), 2);
        // Same row again: nothing to redraw.
        assert_eq!(view.handle_event(hover(5, 3), &selection), SelectAction::None);

        view.close();
        rendered(&mut view, &selection);
        assert_eq!(view.handle_event(hover(4, 3), &selection), SelectAction::None);
        assert_eq!(view.highlighted(), 2);
    }

    #[test]
    fn scroll_over_list_moves_highlight_with_range_guard() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        rendered(&mut view, &selection);

        let scroll = |kind| {
            InputEvent::Mouse(MouseEvent {
                x: 3,
                y: 2,
                kind,
                modifiers: crate::input::KeyModifiers::none(),
            })
        };
        assert_eq!(
            view.handle_event(scroll(MouseEventKind::ScrollUp), &selection),
            SelectAction::None
        );
        assert_eq!(
            view.handle_event(scroll(MouseEventKind::ScrollDown), &selection),
            SelectAction::Redraw
        );
        assert_eq!(view.highlighted(), 1);
    }

    #[test]
    fn set_items_clamps_highlight_and_drops_row_regions() {
        let mut view = SelectView::new(colors());
        let selection = Selection::single();
        view.open();
        view.set_highlighted(2);
        rendered(&mut view, &selection);

        view.set_items(vec![SelectItem::new("Only", 9)]);
        assert_eq!(view.highlighted(), 0);
        // Stale rows are gone until the next render.
        assert_eq!(view.handle_event(hover(4, 3), &selection), SelectAction::None);
    }
}
