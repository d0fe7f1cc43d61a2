impl<S, IN> GridMenu<S, IN>
where
    S: ItemSource,
    IN: InputProvider,
{
    fn poll_control(&mut self) -> Control {
        match self.input.poll_control() {
            Ok(control) => control,
            Err(_) => {
                warn!("grid-cmd: input provider failed, frame treated as idle");
                Control::None
            }
        }
    }

    fn apply_control<H>(&mut self, control: Control, host: &mut H)
    where
        H: AssetProvider<S::Item> + Launcher<LaunchIdOf<S>> + UiCycler,
    {
        self.debounce.begin_frame(control.is_debounced());
        self.preview_held = false;

        let page_rows = self.cursor.rows();
        match control {
            Control::Up => self.navigate(NavStep::Up(1)),
            Control::Down => self.navigate(NavStep::Down(1)),
            Control::Left => self.navigate(NavStep::Left),
            Control::Right => self.navigate(NavStep::Right),
            Control::TriggerL => self.navigate(NavStep::Up(page_rows)),
            Control::TriggerR => self.navigate(NavStep::Down(page_rows)),
            Control::A => self.launch_selected(host),
            Control::Start => self.cycle_sort(),
            Control::Y => self.cycle_screen(host),
            Control::B => self.cycle_theme(host),
            Control::X => {
                self.show_preview();
                self.preview_held = true;
            }
            Control::None => {}
        }
    }

    fn launch_selected<H>(&mut self, host: &mut H)
    where
        H: Launcher<LaunchIdOf<S>>,
    {
        let Some(index) = self.selected_index() else {
            debug!("grid-cmd: launch ignored, list empty");
            return;
        };
        let Some(launch_id) = self
            .source
            .list(self.sort)
            .get(index)
            .map(|item| item.launch_id())
        else {
            return;
        };

        debug!("grid-cmd: launch index={} sort={}", index, self.sort.label());
        host.run(launch_id);
    }

    fn cycle_sort(&mut self) {
        if !self.debounce.try_accept() {
            return;
        }

        let previous = self.sort;
        self.sort = self.sort.next();
        self.cursor.reset();
        self.retarget_highlight();
        self.cancel_preview();
        self.frames_focused = 0;
        self.pending_redraw = true;
        debug!(
            "grid-cmd: sort {} -> {} len={}",
            previous.label(),
            self.sort.label(),
            self.item_count()
        );
    }

    fn cycle_screen<H>(&mut self, host: &mut H)
    where
        H: UiCycler,
    {
        if !self.debounce.try_accept() {
            return;
        }

        debug!("grid-cmd: next screen");
        host.advance_to_next_screen();
    }

    fn cycle_theme<H>(&mut self, host: &mut H)
    where
        H: AssetProvider<S::Item>,
    {
        if !self.debounce.try_accept() {
            return;
        }

        self.theme = self.theme.next();
        host.load_theme(self.theme);
        self.pending_redraw = true;
        debug!("grid-cmd: theme -> {}", self.theme.label());
    }

    fn show_preview(&mut self) {
        if self.item_count() == 0 {
            return;
        }

        let layout = self.config.layout;
        let position = self.cursor.position();
        let from_center = layout.tile_rect(position.row, position.column).center();

        if self.preview.begin(
            from_center,
            layout.preview_end_center(),
            layout.preview_start_size(),
            layout.preview_end_size(),
        ) {
            debug!(
                "grid-anim: preview start index={} frames={}",
                self.cursor.selected_index(),
                self.config.preview_frames
            );
            self.pending_redraw = true;
        }
    }
}
