impl<D, B, T, P, L> KioskApp<D, B, T, P, L>
where
    D: DisplayPanel,
    B: Backlight,
    T: TouchPanel,
    P: PhotoDecoder,
    L: PoemLibrary,
{
    pub fn new(
        display: D,
        backlight: B,
        touch: T,
        photos: P,
        mut library: L,
        mut cfg: KioskConfig,
    ) -> Self {
        if cfg.backlight_max < cfg.backlight_min {
            core::mem::swap(&mut cfg.backlight_max, &mut cfg.backlight_min);
        }
        cfg.backlight_min = cfg.backlight_min.min(100);
        cfg.backlight_max = cfg.backlight_max.min(100);
        cfg.fade_ms = cfg.fade_ms.max(1);

        let playlist =
            PlaylistBuilder::new(cfg.seed, cfg.start_poem_id.clone()).build(library.list_ids());
        let transition = FadeTransition::new(cfg.fade_ms, cfg.backlight_min, cfg.backlight_max);

        let state = if playlist.is_empty() {
            info!("library is empty; parking");
            KioskState::EmptyLibrary
        } else {
            info!("kiosk ready with {} poems", playlist.len());
            KioskState::Load
        };

        Self {
            display,
            backlight,
            touch,
            photos,
            library,
            cfg,
            playlist,
            play_index: 0,
            layout: None,
            page_index: 0,
            transition,
            state,
            status_pending: true,
            load_failures: 0,
            touch_was_down: false,
            touch_count: 0,
        }
    }

    /// Advance the state machine against the given monotonic clock.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        match self.state {
            KioskState::Load => {
                self.tick_load(now_ms);
                TickResult::Running
            }
            KioskState::FadeIn => {
                if self.transition.update(now_ms, &mut self.backlight) {
                    // Dwell starts when the fade-in completes.
                    self.state = KioskState::Display {
                        deadline_ms: now_ms.wrapping_add(self.cfg.dwell_ms),
                    };
                }
                TickResult::Running
            }
            KioskState::Display { deadline_ms } => {
                self.tick_display(now_ms, deadline_ms);
                TickResult::Running
            }
            KioskState::FadeOut => {
                // Touch is ignored here by construction: the panel is
                // never polled while fading.
                if self.transition.update(now_ms, &mut self.backlight) {
                    self.advance_poem();
                    self.state = KioskState::Load;
                }
                TickResult::Running
            }
            KioskState::EmptyLibrary => {
                if self.status_pending {
                    self.status_pending = false;
                    self.show_status(EMPTY_LIBRARY_MESSAGE);
                }
                TickResult::Parked
            }
            KioskState::Exhausted => {
                if self.status_pending {
                    self.status_pending = false;
                    self.show_status(EXHAUSTED_MESSAGE);
                }
                TickResult::Parked
            }
        }
    }

    fn tick_load(&mut self, now_ms: u64) {
        // Stay dark while the page is composed.
        self.backlight.set_level(self.cfg.backlight_min);

        let poem_id = self.playlist[self.play_index].clone();
        match self.library.load(&poem_id) {
            Ok(poem) => {
                self.layout = Some(layout::paginate(
                    &self.display,
                    &poem.title,
                    &poem.body,
                    &self.cfg,
                ));
                self.page_index = 0;
                self.load_failures = 0;
                self.render_page();
                self.transition.start(FadeDirection::In, now_ms);
                self.state = KioskState::FadeIn;
            }
            Err(err) => {
                warn!("skipping poem '{poem_id}': {err}");
                self.load_failures += 1;
                if self.load_failures >= self.playlist.len() {
                    // One full pass with nothing loadable. Park instead of
                    // spinning through the same failures forever.
                    warn!("all {} playlist entries failed to load", self.playlist.len());
                    self.status_pending = true;
                    self.state = KioskState::Exhausted;
                } else {
                    self.advance_poem();
                    // Stay in Load; the next tick retries with the new id.
                }
            }
        }
    }

    fn tick_display(&mut self, now_ms: u64, deadline_ms: u64) {
        if self.touch_fired() {
            self.advance_page_wrap();
            // A tap resets the dwell timer and keeps the fade away.
            self.state = KioskState::Display {
                deadline_ms: now_ms.wrapping_add(self.cfg.dwell_ms),
            };
            self.render_page();
            return;
        }

        if deadline_reached(now_ms, deadline_ms) {
            self.transition.start(FadeDirection::Out, now_ms);
            self.state = KioskState::FadeOut;
        }
    }

    fn advance_page_wrap(&mut self) {
        if let Some(layout) = self.layout.as_ref() {
            self.page_index = (self.page_index + 1) % layout.pages.len();
        }
    }

    fn advance_poem(&mut self) {
        self.play_index += 1;
        if self.play_index >= self.playlist.len() {
            // Playback repeats indefinitely in the same order.
            self.play_index = 0;
        }
    }
}

/// Wrap-safe deadline comparison: the wrapping subtraction is read as a
/// signed delta, as in [`FadeTransition`].
fn deadline_reached(now_ms: u64, deadline_ms: u64) -> bool {
    now_ms.wrapping_sub(deadline_ms) as i64 >= 0
}
