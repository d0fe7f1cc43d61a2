impl<S, IN> GridMenu<S, IN>
where
    S: ItemSource,
    IN: InputProvider,
{
    fn navigate(&mut self, step: NavStep) {
        let len = self.item_count();
        if len == 0 || !self.debounce.try_accept() {
            return;
        }

        let before = self.cursor.position();
        let before_index = self.cursor.selected_index();
        match step {
            NavStep::Up(rows) => self.cursor.move_up(rows, len),
            NavStep::Down(rows) => self.cursor.move_down(rows, len),
            NavStep::Left => self.cursor.move_left(len),
            NavStep::Right => self.cursor.move_right(len),
        }

        let after = self.cursor.position();
        debug!(
            "grid-nav: {:?} index={}->{} page_start={}->{} len={}",
            step,
            before_index,
            self.cursor.selected_index(),
            before.page_start,
            after.page_start,
            len
        );

        if after != before {
            self.retarget_highlight();
        }
        self.cancel_preview();
        self.frames_focused = 0;
        self.pending_redraw = true;
    }

    fn retarget_highlight(&mut self) {
        let target = self.rest_position();
        self.selection.retarget(target);
    }

    fn cancel_preview(&mut self) {
        if self.preview.is_visible() {
            debug!("grid-anim: preview cancelled by navigation");
        }
        self.preview.cancel();
    }
}
