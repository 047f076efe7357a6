//! Application state, event handling and the draw loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use folio_config::Config;
use folio_contact::{
    ContactForm, ContactSender, EmailJsMailer, Field, SubmitError, Templates, Toasts,
};
use folio_core::{
    ColorTheme, PROJECTS, ProjectFilter, SKILL_CATEGORIES, STATS, Section, TECH_ROW_LEFT,
    TECH_ROW_RIGHT, filter_projects,
};
use folio_particles::{CanvasSurface, FrameScheduler, ParticleRenderer, Size};
use folio_watch::{
    ActiveSectionTracker, CounterAnimation, Direction, Marquee, ProgressBarAnimation, RowSpan,
    bar_delay_ms, is_scrolled, visible_fraction,
};
use ratatui::{DefaultTerminal, Frame, buffer::Buffer, layout::Rect, style::Style};

use crate::layout::PageLayout;
use crate::sections::{
    PageContext, Palette, about, contact, footer, hero,
    nav::{self, NavState},
    projects, skills, toasts,
};

/// Period of the left-scrolling tech row.
const MARQUEE_LEFT_MS: u64 = 35_000;
/// Period of the right-scrolling tech row.
const MARQUEE_RIGHT_MS: u64 = 30_000;

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    started: Instant,
    frame_interval: Duration,
    particles_enabled: bool,
    /// Current color theme.
    color_theme: ColorTheme,

    layout: PageLayout,
    /// First page row shown at the top of the terminal.
    scroll: u16,
    /// Off-screen rendering of the whole page.
    page: Buffer,

    active: ActiveSectionTracker,
    menu_open: bool,
    filter: ProjectFilter,
    selected_project: usize,

    counters: Vec<CounterAnimation>,
    bars: Vec<Vec<ProgressBarAnimation>>,
    marquees: Vec<Marquee>,

    scheduler: FrameScheduler,
    /// When the scheduler last fired.
    last_frame: Option<Instant>,
    particles: Option<ParticleRenderer>,
    /// Mounting failed for the current size; retried after a resize.
    mount_failed: bool,
    canvas: CanvasSurface,

    form: ContactForm,
    editing: bool,
    form_error: Option<String>,
    sender: ContactSender,
    toasts: Toasts,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let mailer = EmailJsMailer::from_config(&config.email);
        let sender = ContactSender::new(Arc::new(mailer), Templates::from_config(&config.email));
        let color_theme = config.display.color_theme;
        let filter = ProjectFilter::default();

        let counters = STATS.iter().map(|s| CounterAnimation::new(s.value)).collect();
        let bars = SKILL_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, category)| {
                category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(j, skill)| {
                        ProgressBarAnimation::new(f64::from(skill.level), bar_delay_ms(i, j))
                    })
                    .collect()
            })
            .collect();
        let marquees = vec![
            Marquee::new(TECH_ROW_LEFT, MARQUEE_LEFT_MS, Direction::Left),
            Marquee::new(TECH_ROW_RIGHT, MARQUEE_RIGHT_MS, Direction::Right),
        ];

        Self {
            running: false,
            started: Instant::now(),
            frame_interval: config.display.frame_interval(),
            particles_enabled: config.display.particles,
            color_theme,
            layout: PageLayout::new(0, 0, filter),
            scroll: 0,
            page: Buffer::default(),
            active: ActiveSectionTracker::new(),
            menu_open: false,
            filter,
            selected_project: 0,
            counters,
            bars,
            marquees,
            scheduler: FrameScheduler::new(),
            last_frame: None,
            particles: None,
            mount_failed: false,
            canvas: CanvasSurface::new(Size::default(), color_theme.rgb()),
            form: ContactForm::new(),
            editing: false,
            form_error: None,
            sender,
            toasts: Toasts::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);

        self.running = true;
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        if let Some(renderer) = self.particles.take() {
            renderer.unmount(&mut self.scheduler);
        }
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Advance everything that moves on its own: deliveries, toasts,
    /// watchers and the particle field.
    fn tick(&mut self) {
        let now = self.now_ms();

        if let Some(outcome) = self.sender.poll() {
            self.form.finish_submit(&outcome, &mut self.toasts, now);
        }
        self.toasts.prune(now);

        self.observe(now);
        self.update_particles();

        if !self.frame_due(Instant::now()) {
            return;
        }
        let fired = self.scheduler.fire();
        if let Some(renderer) = self.particles.as_mut() {
            renderer.on_frame(&fired, &mut self.canvas, &mut self.scheduler);
        }
    }

    /// Whether a display frame is due at `now`. Input events wake the loop
    /// early, so frames are paced by `frame_interval` rather than by ticks.
    fn frame_due(&mut self, now: Instant) -> bool {
        match self.last_frame {
            Some(last) if now.duration_since(last) < self.frame_interval => false,
            _ => {
                self.last_frame = Some(now);
                true
            }
        }
    }

    /// Feed the current viewport to every watcher.
    fn observe(&mut self, now: u64) {
        let rows = self.layout.viewport_rows;

        let about_top = self.layout.top(Section::About);
        for (counter, stat_row) in self.counters.iter_mut().zip(&self.layout.about.stat_rows) {
            let top = PageLayout::relative(about_top + stat_row, self.scroll);
            let span = RowSpan::new(top, about::STAT_HEIGHT);
            counter.observe(visible_fraction(span, rows), now);
        }

        let skills_top = self.layout.top(Section::Skills);
        for (bars, bar_rows) in self.bars.iter_mut().zip(&self.layout.skills.bar_rows) {
            for (bar, bar_row) in bars.iter_mut().zip(bar_rows) {
                let top = PageLayout::relative(skills_top + bar_row, self.scroll);
                bar.observe(visible_fraction(RowSpan::new(top, 1), rows), now);
            }
        }

        self.active.update(self.layout.section_tops(self.scroll));
    }

    /// Keep a particle renderer mounted exactly while the hero is on screen.
    fn update_particles(&mut self) {
        let hero = self.layout.area(Section::Home);
        let wanted = self.particles_enabled && self.layout.is_visible(hero, self.scroll);

        match (self.particles.is_some(), wanted) {
            (false, true) if !self.mount_failed => {
                let size = Size::from_cells(hero.width, hero.height);
                self.canvas.set_size(size);
                self.particles = ParticleRenderer::mount(size, &mut self.scheduler);
                self.mount_failed = self.particles.is_none();
            }
            (true, false) => {
                if let Some(renderer) = self.particles.take() {
                    renderer.unmount(&mut self.scheduler);
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        log::debug!("viewport resized to {width}x{height}");
        self.layout = PageLayout::new(width, height, self.filter);
        self.scroll = self.scroll.min(self.layout.max_scroll());
        self.mount_failed = false;

        let hero = self.layout.area(Section::Home);
        let size = Size::from_cells(hero.width, hero.height);
        self.canvas.set_size(size);
        if let Some(renderer) = self.particles.as_mut() {
            renderer.on_resize(size);
        }
        if !nav::is_compact(width) {
            self.menu_open = false;
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.now_ms();
        let palette = Palette::new(self.color_theme);
        let page_area = self.layout.page_area();
        if self.page.area != page_area {
            self.page = Buffer::empty(page_area);
        } else {
            self.page.reset();
        }

        let ctx = PageContext {
            palette,
            now_ms: now,
            counters: &self.counters,
            bars: &self.bars,
            marquees: &self.marquees,
            filter: self.filter,
            selected_project: self.selected_project,
            form: &self.form,
            editing: self.editing,
            form_error: self.form_error.as_deref(),
            particles: self.particles.as_ref().map(|_| &self.canvas),
            year: Local::now().year(),
        };
        render_page(&mut self.page, &self.layout, self.scroll, &ctx);

        let area = frame.area();
        let buf = frame.buffer_mut();
        for y in 0..area.height {
            let page_y = self.scroll.saturating_add(y);
            if page_y >= page_area.height {
                break;
            }
            for x in 0..area.width.min(page_area.width) {
                buf[(area.x + x, area.y + y)] = self.page[(x, page_y)].clone();
            }
        }

        nav::render(
            area,
            buf,
            &palette,
            NavState {
                active: self.active.active(),
                scrolled: is_scrolled(self.scroll),
                menu_open: self.menu_open,
            },
        );
        toasts::render(area, buf, &palette, &self.toasts, now);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame so animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c' | 'C')) = (key.modifiers, key.code) {
            self.quit();
            return;
        }
        if self.editing {
            self.on_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc if self.menu_open => self.menu_open = false,
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.jump_to(self.active.active().next()),
            KeyCode::BackTab => self.jump_to(self.active.active().prev()),
            KeyCode::Char(digit @ '1'..='9') => {
                if let Some(section) = digit.to_digit(10).and_then(Section::from_digit) {
                    self.jump_to(section);
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.page_rows()),
            KeyCode::PageUp => self.scroll_by(-self.page_rows()),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to(self.layout.max_scroll()),
            KeyCode::Char('h') => self.jump_to(Section::Contact),
            KeyCode::Char('p') => self.jump_to(Section::Projects),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Left => self.select_project(-1),
            KeyCode::Right => self.select_project(1),
            KeyCode::Char('m') if nav::is_compact(self.layout.width) => {
                self.menu_open = !self.menu_open;
            }
            KeyCode::Char('e') => {
                self.editing = true;
                self.jump_to(Section::Contact);
            }
            KeyCode::Char('c') => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Keys while the contact form has focus.
    fn on_form_key(&mut self, key: KeyEvent) {
        self.form_error = None;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => self.editing = false,
            (KeyModifiers::CONTROL, KeyCode::Char('s' | 'S')) => self.submit(),
            (_, KeyCode::Tab) => self.form.focus_next(),
            (_, KeyCode::BackTab) => self.form.focus_prev(),
            (_, KeyCode::Enter) if self.form.focus() == Field::Message => self.form.insert('\n'),
            (_, KeyCode::Enter) => self.form.focus_next(),
            (_, KeyCode::Backspace) => self.form.backspace(),
            (modifiers, KeyCode::Char(ch)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert(ch);
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            _ => {}
        }
    }

    /// Validate the form and hand the message to the background sender.
    fn submit(&mut self) {
        match self.form.begin_submit() {
            Ok(message) => {
                log::info!("sending contact message from {}", message.email);
                self.sender.submit(message);
            }
            Err(SubmitError::InFlight) => {}
            Err(e @ SubmitError::Invalid(_)) => {
                log::debug!("contact form refused: {e}");
                self.form_error = Some(e.to_string());
            }
        }
    }

    fn page_rows(&self) -> i32 {
        i32::from(self.layout.viewport_rows.saturating_sub(2).max(1))
    }

    fn scroll_by(&mut self, rows: i32) {
        let target = (i32::from(self.scroll) + rows).max(0);
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX));
    }

    fn scroll_to(&mut self, row: u16) {
        self.scroll = row.min(self.layout.max_scroll());
    }

    /// Anchor navigation: bring `section` to the top of the viewport.
    fn jump_to(&mut self, section: Section) {
        log::debug!("jump to {}", section.anchor());
        self.menu_open = false;
        self.scroll = self.layout.scroll_to(section);
    }

    fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_project = 0;
        self.layout = PageLayout::new(self.layout.width, self.layout.viewport_rows, self.filter);
        self.scroll = self.scroll.min(self.layout.max_scroll());
    }

    /// Move the project selection, wrapping within the filtered list.
    fn select_project(&mut self, delta: isize) {
        let count = filter_projects(PROJECTS, self.filter).len();
        if count == 0 {
            return;
        }
        let current = self.selected_project.min(count - 1) as isize;
        self.selected_project = (current + delta).rem_euclid(count as isize) as usize;
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
        self.canvas.set_accent(self.color_theme.rgb());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Draw every section that overlaps the viewport into the page buffer.
fn render_page(page: &mut Buffer, layout: &PageLayout, scroll: u16, ctx: &PageContext) {
    let visible_rows = Rect {
        y: scroll,
        height: layout.viewport_rows.min(layout.total.saturating_sub(scroll)),
        ..layout.page_area()
    };
    page.set_style(visible_rows, Style::new().bg(ctx.palette.bg).fg(ctx.palette.fg));

    for section in Section::ALL {
        let area = layout.area(section);
        if !layout.is_visible(area, scroll) {
            continue;
        }
        match section {
            Section::Home => hero::render(area, page, ctx),
            Section::About => about::render(area, page, ctx, &layout.about),
            Section::Skills => skills::render(area, page, ctx, &layout.skills),
            Section::Projects => projects::render(area, page, ctx, &layout.projects),
            Section::Contact => contact::render(area, page, ctx, &layout.contact),
        }
    }
    let footer_area = layout.footer_area();
    if layout.is_visible(footer_area, scroll) {
        footer::render(footer_area, page, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(width: u16, height: u16) -> App {
        let mut config = Config::default();
        config.display.particles = false;
        let mut app = App::new(&config);
        app.resize(width, height);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_section_digits_jump() {
        let mut app = app(120, 40);
        app.on_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.scroll, app.layout.scroll_to(Section::Skills));
        app.on_key_event(key(KeyCode::Char('g')));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app(120, 40);
        app.on_key_event(key(KeyCode::Up));
        assert_eq!(app.scroll, 0);
        app.on_key_event(key(KeyCode::End));
        let max = app.layout.max_scroll();
        assert_eq!(app.scroll, max);
        app.on_key_event(key(KeyCode::Down));
        assert_eq!(app.scroll, max);
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut app = app(120, 40);
        app.on_key_event(key(KeyCode::Char('2')));
        app.tick();
        assert_eq!(app.active.active(), Section::About);
        app.on_key_event(key(KeyCode::Tab));
        app.tick();
        assert_eq!(app.active.active(), Section::Skills);
    }

    #[test]
    fn test_counters_start_when_stats_scroll_into_view() {
        let mut app = app(120, 40);
        app.tick();
        assert!(app.counters.iter().all(|c| !c.is_started()));
        app.on_key_event(key(KeyCode::Char('2')));
        app.tick();
        assert!(app.counters.iter().all(CounterAnimation::is_started));
    }

    #[test]
    fn test_filter_resets_selection_and_relayouts() {
        let mut app = app(120, 40);
        app.on_key_event(key(KeyCode::Right));
        app.on_key_event(key(KeyCode::Right));
        assert_eq!(app.selected_project, 2);
        let total = app.layout.total;

        app.on_key_event(key(KeyCode::Char('f')));
        assert_eq!(app.filter, ProjectFilter::Featured);
        assert_eq!(app.selected_project, 0);
        assert!(app.layout.total < total);

        app.on_key_event(key(KeyCode::Left));
        assert_eq!(app.selected_project, 1);
    }

    #[test]
    fn test_form_captures_typing() {
        let mut app = app(120, 40);
        app.on_key_event(key(KeyCode::Char('e')));
        assert!(app.editing);
        assert_eq!(app.scroll, app.layout.scroll_to(Section::Contact));

        for ch in "Ada".chars() {
            app.on_key_event(key(KeyCode::Char(ch)));
        }
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(app.editing);
        assert_eq!(app.form.value(Field::Name), "Adaq");

        app.on_key_event(key(KeyCode::Esc));
        assert!(!app.editing);
    }

    #[test]
    fn test_invalid_submit_shows_error() {
        let mut app = app(120, 40);
        app.on_key_event(key(KeyCode::Char('e')));
        app.on_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!app.form.is_submitting());
        assert_eq!(app.form_error.as_deref(), Some("Your Name is required"));
    }

    #[test]
    fn test_particles_follow_hero_visibility() {
        let mut config = Config::default();
        config.display.particles = true;
        let mut app = App::new(&config);
        app.frame_interval = Duration::ZERO;
        app.resize(100, 30);

        // Mounting requests a frame that the same tick delivers.
        app.tick();
        assert!(app.particles.is_some());
        app.tick();
        assert_eq!(app.particles.as_ref().map(ParticleRenderer::frames), Some(2));

        app.on_key_event(key(KeyCode::Char('5')));
        app.tick();
        assert!(app.particles.is_none());
        assert!(!app.scheduler.has_pending());
    }

    #[test]
    fn test_particles_step_once_per_frame_interval() {
        let mut config = Config::default();
        config.display.particles = true;
        let mut app = App::new(&config);
        app.frame_interval = Duration::from_secs(3600);
        app.resize(100, 30);

        app.tick();
        // Input wakes the loop early; the next frame is not due yet.
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        app.tick();
        app.tick();
        assert_eq!(app.particles.as_ref().map(ParticleRenderer::frames), Some(1));

        let later = app.last_frame.map(|t| t + Duration::from_secs(3600));
        assert!(later.is_some_and(|t| app.frame_due(t)));
    }

    #[test]
    fn test_failed_mount_waits_for_resize() {
        let mut config = Config::default();
        config.display.particles = true;
        let mut app = App::new(&config);
        app.frame_interval = Duration::ZERO;
        app.resize(0, 30);

        app.tick();
        assert!(app.particles.is_none());
        assert!(app.mount_failed);
        app.tick();
        assert!(app.particles.is_none());
        assert!(!app.scheduler.has_pending());

        app.resize(100, 30);
        assert!(!app.mount_failed);
        app.tick();
        assert!(app.particles.is_some());
    }

    #[test]
    fn test_theme_cycles() {
        let mut app = app(120, 40);
        let before = app.color_theme;
        app.on_key_event(key(KeyCode::Char('c')));
        assert_ne!(app.color_theme, before);
    }

    #[test]
    fn test_page_renders_visible_sections() {
        let app = app(120, 40);
        let ctx = PageContext {
            palette: Palette::new(app.color_theme),
            now_ms: 0,
            counters: &app.counters,
            bars: &app.bars,
            marquees: &app.marquees,
            filter: app.filter,
            selected_project: 0,
            form: &app.form,
            editing: false,
            form_error: None,
            particles: None,
            year: 2025,
        };
        let mut page = Buffer::empty(app.layout.page_area());
        render_page(&mut page, &app.layout, 0, &ctx);

        let row_text = |y: u16| -> String {
            (0..page.area.width)
                .map(|x| page[(x, y)].symbol().to_string())
                .collect()
        };
        let hero: String = (0..40).map(row_text).collect();
        assert!(hero.contains("Frontend Web Developer"));
        // Sections below the fold are skipped.
        let about_top = app.layout.top(Section::About);
        let about: String = (about_top..about_top + 10).map(row_text).collect();
        assert!(!about.contains("About Me"));
    }
}
