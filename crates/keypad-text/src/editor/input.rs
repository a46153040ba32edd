impl<IN, M> EditorApp<IN, M>
where
    IN: InputProvider,
    M: TextMeasure,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_key_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("editor: input provider error, skipping rest of frame");
                    break;
                }
            }
        }
    }

    fn apply_key_event(&mut self, event: KeyEvent, now_ms: u64) {
        if let Some(key) = event.engine_key() {
            self.engine.handle_key(key, now_ms);
            return;
        }

        match event {
            KeyEvent::Left => self.move_cursor(-1),
            KeyEvent::Right => self.move_cursor(1),
            KeyEvent::Up => self.move_cursor_vertical(LineStep::Up),
            KeyEvent::Down => self.move_cursor_vertical(LineStep::Down),
            KeyEvent::Escape => {
                self.engine.commit();
                self.exit_requested = true;
                debug!(
                    "editor: exit requested len={} cursor={}",
                    self.engine.text().len(),
                    self.engine.cursor()
                );
            }
            _ => {}
        }
    }
}
