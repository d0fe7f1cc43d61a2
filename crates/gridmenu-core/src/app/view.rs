impl<S, IN> GridMenu<S, IN>
where
    S: ItemSource,
    IN: InputProvider,
{
    /// Build this frame's view model and hand it to `f`.
    pub fn with_screen<A, F>(&self, assets: &mut A, f: F)
    where
        A: AssetProvider<S::Item>,
        F: FnOnce(Screen<'_, A::Image>),
    {
        let list = self.source.list(self.sort);
        let len = list.len();
        if len == 0 {
            f(Screen::Empty {
                theme: self.theme,
                sort: self.sort,
            });
            return;
        }

        let layout = &self.config.layout;
        let position = self.cursor.position();
        let columns = self.cursor.columns();
        let selected = self.cursor.selected_index().min(len - 1);

        let mut tiles: heapless::Vec<TileView<A::Image>, MAX_VISIBLE_TILES> = heapless::Vec::new();
        'rows: for row in 0..self.cursor.rows() {
            for column in 0..columns {
                let index = position.page_start + row * columns + column;
                let Some(item) = list.get(index) else {
                    break 'rows;
                };

                let tile = TileView {
                    rect: layout.tile_rect(row, column),
                    icon: assets.small_icon(item),
                    index,
                    selected: index == selected,
                };
                if tiles.push(tile).is_err() {
                    break 'rows;
                }
            }
        }

        let style = self.theme.style();
        let highlight_origin = self
            .selection
            .animated_position()
            .unwrap_or_else(|| layout.highlight_origin(position.row, position.column));
        let highlight = HighlightView {
            rect: Rect::new(highlight_origin, layout.highlight_size()),
            color: style.highlight_color,
            animated: self.selection.is_alive(),
        };

        let item = list.get(selected);
        let preview = match item {
            Some(item) if self.preview.is_visible() => {
                assets.large_art(item).map(|art| PreviewView {
                    center: self.preview.center(),
                    size: self.preview.size(),
                    art,
                })
            }
            _ => None,
        };

        let mut title_buf = [0u8; TITLE_BUFFER_BYTES];
        let text = match item {
            Some(item) => title_limited(
                item.display_name(),
                &mut title_buf,
                self.config.title_max_chars,
            ),
            None => "",
        };

        let mut position_buf = [0u8; POSITION_BUFFER_BYTES];
        let position_text = position_label(selected, len, &mut position_buf);

        f(Screen::Grid {
            tiles: &tiles,
            highlight,
            preview,
            title: TitleView {
                text,
                color: style.text_color,
                center_x: layout.title_center_x(),
                baseline_y: f32::from(layout.title_baseline),
                max_width: layout.title_max_width(),
            },
            position: position_text,
            theme: self.theme,
            sort: self.sort,
            focus_settled: self.is_focus_settled(),
        });
    }
}
