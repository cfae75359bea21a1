impl<D, B, T, P, L> KioskApp<D, B, T, P, L>
where
    D: DisplayPanel,
    B: Backlight,
    T: TouchPanel,
    P: PhotoDecoder,
    L: PoemLibrary,
{
    /// Render the current page: photo, dim overlay, then the title block
    /// and the page's body lines, all upper-cased to match measurement.
    fn render_page(&mut self) {
        if self.layout.is_none() {
            return;
        }
        let poem_id = self.playlist[self.play_index].clone();

        if let Err(err) = self.photos.decode(&poem_id) {
            warn!("photo decode failed for '{poem_id}': {err}");
            self.display.clear();
        }
        self.dither_dim(DIM_STEP_PX);

        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let (width, _) = self.display.bounds();
        let margin = self.cfg.margin_px;
        let wrap_w = width.saturating_sub(margin * 2);
        let mut y = margin;

        for line in &layout.title_lines {
            self.display
                .draw_text(&line.to_uppercase(), margin, y, wrap_w, self.cfg.title_scale);
            y += line_height(self.cfg.title_scale, self.cfg.line_spacing_px);
        }
        y += self.cfg.title_gap_px;

        for line in &layout.pages[self.page_index] {
            self.display
                .draw_text(&line.to_uppercase(), margin, y, wrap_w, self.cfg.body_scale);
            y += line_height(self.cfg.body_scale, self.cfg.line_spacing_px);
        }

        self.display.flush();
    }

    /// Darken the photo with a sparse black pixel grid so text stays
    /// legible over bright areas.
    fn dither_dim(&mut self, step: u32) {
        let (width, height) = self.display.bounds();
        let mut y = 0;
        while y < height {
            let mut x = (y / step) % step;
            while x < width {
                self.display.draw_pixel(x, y);
                x += step;
            }
            y += step;
        }
    }

    /// Full-brightness status card used by the terminal park states.
    fn show_status(&mut self, message: &str) {
        self.backlight.set_level(self.cfg.backlight_max);
        self.display.clear();

        let (width, height) = self.display.bounds();
        let margin = self.cfg.margin_px;
        let lines = layout::wrap_words(
            &self.display,
            &layout::sanitize(message),
            width,
            margin,
            STATUS_SCALE,
            self.cfg.line_spacing_px,
        );

        let wrap_w = width.saturating_sub(margin * 2);
        let max_y = height.saturating_sub(margin);
        let mut y = margin;
        for line in lines {
            if y + line_height(STATUS_SCALE, 0) > max_y {
                break;
            }
            self.display
                .draw_text(&line.to_uppercase(), margin, y, wrap_w, STATUS_SCALE);
            y += line_height(STATUS_SCALE, self.cfg.line_spacing_px);
        }

        self.display.flush();
    }
}
