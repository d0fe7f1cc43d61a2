impl<S, IN> GridMenu<S, IN>
where
    S: ItemSource,
    IN: InputProvider,
{
    pub fn new(source: S, input: IN, mut config: MenuConfig) -> Self {
        config.layout = config.layout.sanitized();
        let layout = config.layout;

        Self {
            source,
            input,
            config,
            cursor: GridCursor::new(usize::from(layout.rows), usize::from(layout.columns)),
            debounce: NavDebouncer::new(config.input_timeout),
            selection: SelectionAnimator::new(
                config.highlight_frames,
                layout.highlight_origin(0, 0),
            ),
            preview: PreviewAnimator::new(config.preview_frames),
            sort: SortMode::Default,
            theme: config.initial_theme,
            preview_held: false,
            frames_focused: 0,
            pending_redraw: true,
        }
    }

    /// Start over on the current list: origin cursor, default order, no
    /// animations in flight.
    pub fn setup(&mut self) {
        self.cursor.reset();
        self.debounce.reset();
        self.sort = SortMode::Default;
        self.selection.clear(self.rest_position());
        self.preview.clear();
        self.preview_held = false;
        self.frames_focused = 0;
        self.pending_redraw = true;
        debug!("grid-nav: setup len={}", self.item_count());
    }

    /// Run one frame: sample input, apply at most one command, then advance
    /// every animation by one frame.
    pub fn tick<H>(&mut self, host: &mut H) -> TickResult
    where
        H: AssetProvider<S::Item> + Launcher<LaunchIdOf<S>> + UiCycler,
    {
        self.revalidate_cursor();
        let control = self.poll_control();
        self.apply_control(control, host);
        self.update_animations();
        let settled_now = self.advance_focus();

        let animating = self.selection.is_alive() || self.preview.is_alive();
        if core::mem::take(&mut self.pending_redraw) || settled_now || animating {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub const fn position(&self) -> GridPosition {
        self.cursor.position()
    }

    /// Absolute index of the selected item, `None` while the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        let len = self.item_count();
        let index = self.cursor.selected_index();
        (index < len).then_some(index)
    }

    pub fn selected_item(&self) -> Option<&S::Item> {
        let index = self.selected_index()?;
        self.source.list(self.sort).get(index)
    }

    pub fn item_count(&self) -> usize {
        self.source.list(self.sort).len()
    }

    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the backing list. The cursor is re-checked against
    /// the new length on the next tick.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub const fn is_preview_visible(&self) -> bool {
        self.preview.is_visible()
    }

    pub const fn is_highlight_moving(&self) -> bool {
        self.selection.is_alive()
    }

    pub fn is_focus_settled(&self) -> bool {
        self.frames_focused >= self.config.focus_settle_frames
    }

    fn rest_position(&self) -> Vec2 {
        let position = self.cursor.position();
        self.config
            .layout
            .highlight_origin(position.row, position.column)
    }

    fn revalidate_cursor(&mut self) {
        let len = self.item_count();
        if self.cursor.revalidate(len) {
            debug!("grid-nav: list shrank under cursor len={}, back to origin", len);
            self.retarget_highlight();
            self.cancel_preview();
            self.frames_focused = 0;
            self.pending_redraw = true;
        }
    }

    fn update_animations(&mut self) {
        let was_visible = self.preview.is_visible();

        self.selection.update();
        self.preview.update(self.preview_held);

        if was_visible != self.preview.is_visible() {
            self.pending_redraw = true;
        }

        let rest = self.rest_position();
        self.selection.settle(rest);
    }

    /// Returns `true` on the frame the selection becomes settled.
    fn advance_focus(&mut self) -> bool {
        if self.frames_focused >= self.config.focus_settle_frames {
            return false;
        }

        self.frames_focused += 1;
        self.frames_focused == self.config.focus_settle_frames
    }
}
