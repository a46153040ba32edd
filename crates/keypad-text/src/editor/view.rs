impl<IN, M> EditorApp<IN, M>
where
    IN: InputProvider,
    M: TextMeasure,
{
    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn with_screen<F>(&mut self, now_ms: u64, f: F)
    where
        F: FnOnce(EditorScreen<'_>),
    {
        self.layout.refresh(&self.engine, &self.measure);

        let cursor = self.layout.display_cursor();
        let candidate = self.engine.candidate_char().map(|ch| CandidateView {
            ch,
            byte_start: cursor.saturating_sub(ch.len_utf8()),
            remaining_pct: self.engine.candidate_remaining_pct(now_ms).unwrap_or(0),
        });

        let cursor_visible = self.cursor_visible(now_ms);
        let (paragraph, column) = self.layout.cursor_position();
        let column = u16::try_from(column.saturating_add(1)).unwrap_or(u16::MAX);
        let position = cursor_position_label(paragraph, column, &mut self.position_label);

        f(EditorScreen {
            title: self.title,
            position,
            text: self.layout.display_text(),
            lines: self.layout.visible_lines(),
            first_line_index: self.layout.window().first_visible,
            cursor_line: self.layout.cursor_line(),
            cursor,
            cursor_visible,
            candidate,
        });
    }
}
