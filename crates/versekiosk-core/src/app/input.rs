impl<D, B, T, P, L> KioskApp<D, B, T, P, L>
where
    D: DisplayPanel,
    B: Backlight,
    T: TouchPanel,
    P: PhotoDecoder,
    L: PoemLibrary,
{
    /// Rising-edge tap detection: fires only when the panel reads pressed
    /// on this poll and released on the previous one, so a continuous press
    /// produces exactly one tap.
    fn touch_fired(&mut self) -> bool {
        self.touch.poll();
        let down = self.touch.is_down();
        let fired = down && !self.touch_was_down;
        self.touch_was_down = down;

        if fired {
            self.touch_count += 1;
            let (x, y) = self.touch.position();
            debug!("tap #{} at ({x}, {y})", self.touch_count);
        }
        fired
    }
}
