//! The interactive session: one event loop over stdin commands, live
//! snapshots, and timers.
//!
//! Presentation stays deliberately thin - the reducer in `unspoken-core`
//! decides what is shown, this module only prints it. The entry set is
//! replaced wholesale on every snapshot and the reducer re-runs each time;
//! nothing is patched incrementally.

use std::time::Duration;

use chrono::{Local, Utc};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use unspoken_core::domain::{
    DeviceSettings, Entry, LockState, Mood, PublicPost, validate_pin,
};
use unspoken_core::ports::{AuthUser, PUBLIC_FEED_LIMIT, SubscriptionId};
use unspoken_core::view::{
    FilterState, QUICK_TEMPLATES, ViewModel, daily_prompt, greeting_at, reminder_at, visible,
};

use crate::actions::{auth, backup, entries, share};
use crate::error::AppResult;
use crate::state::AppState;
use crate::timers::ResettableTimer;

/// How long a transient status line stays up.
const STATUS_CLEAR: Duration = Duration::from_millis(2200);

const INSIGHT_BAR_WIDTH: usize = 20;

enum AppEvent {
    Entries(Vec<Entry>),
    Feed(Vec<PublicPost>),
    Auth(Option<AuthUser>),
    StatusExpired,
    AutoLock,
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Quit,
}

pub async fn run(state: AppState) -> AppResult<()> {
    let settings = DeviceSettings::load(&*state.settings).await;
    let lock = LockState::at_startup(&settings);
    let online = state.connectivity.probe().await;

    let (events_tx, mut events_rx) = mpsc::channel::<AppEvent>(64);

    let auth_tx = events_tx.clone();
    let watch_id = state
        .session
        .watch(Box::new(move |user| {
            let _ = auth_tx.try_send(AppEvent::Auth(user));
        }))
        .await;

    let mut repl = Repl {
        state,
        settings,
        lock,
        online,
        filter: FilterState::default(),
        entries: Vec::new(),
        feed: Vec::new(),
        user: None,
        status: None,
        status_timer: ResettableTimer::new(),
        lock_timer: ResettableTimer::new(),
        events: events_tx,
        entry_sub: None,
        feed_sub: None,
        hidden: false,
        show_feed: true,
    };

    repl.print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if repl.handle_command(&line).await == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(err) => {
                        tracing::error!(error = %err, "Stdin closed");
                        break;
                    }
                }
            }
            event = events_rx.recv() => {
                match event {
                    Some(event) => repl.handle_event(event).await,
                    None => break,
                }
            }
        }
    }

    repl.close_subscriptions().await;
    repl.state.session.unwatch(watch_id).await;
    Ok(())
}

struct Repl {
    state: AppState,
    settings: DeviceSettings,
    lock: LockState,
    online: bool,
    filter: FilterState,
    entries: Vec<Entry>,
    feed: Vec<PublicPost>,
    user: Option<AuthUser>,
    status: Option<String>,
    status_timer: ResettableTimer,
    lock_timer: ResettableTimer,
    events: mpsc::Sender<AppEvent>,
    entry_sub: Option<SubscriptionId>,
    feed_sub: Option<SubscriptionId>,
    hidden: bool,
    show_feed: bool,
}

impl Repl {
    // ---- events ----

    async fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Entries(entries) => {
                self.entries = entries;
                self.render();
            }
            AppEvent::Feed(mut posts) => {
                posts.truncate(PUBLIC_FEED_LIMIT);
                self.feed = posts;
            }
            AppEvent::Auth(Some(user)) => {
                self.set_status(format!(
                    "Signed in as {}",
                    user.email.as_deref().unwrap_or("user")
                ));
                self.user = Some(user);
                self.open_subscriptions().await;
            }
            AppEvent::Auth(None) => {
                if self.user.take().is_some() {
                    self.set_status("Logged out");
                }
                self.close_subscriptions().await;
                self.entries.clear();
                self.feed.clear();
            }
            AppEvent::StatusExpired => {
                self.status = None;
            }
            AppEvent::AutoLock => {
                self.lock.on_idle_timeout(&self.settings);
                if self.lock.is_locked() {
                    self.set_status("Auto-locked");
                    self.render();
                }
            }
        }
    }

    async fn open_subscriptions(&mut self) {
        let Some(user) = &self.user else { return };

        let entries_tx = self.events.clone();
        match self
            .state
            .entries
            .subscribe(
                &user.id,
                Box::new(move |snapshot| {
                    let _ = entries_tx.try_send(AppEvent::Entries(snapshot));
                }),
            )
            .await
        {
            Ok(id) => self.entry_sub = Some(id),
            Err(err) => {
                tracing::error!(error = %err, "Entry subscription failed");
                self.set_status("Could not open the entry feed.");
            }
        }

        let feed_tx = self.events.clone();
        match self
            .state
            .feed
            .subscribe(Box::new(move |posts| {
                let _ = feed_tx.try_send(AppEvent::Feed(posts));
            }))
            .await
        {
            Ok(id) => self.feed_sub = Some(id),
            Err(err) => {
                tracing::error!(error = %err, "Public feed subscription failed");
                self.set_status("Could not open the public feed.");
            }
        }
    }

    async fn close_subscriptions(&mut self) {
        if let Some(id) = self.entry_sub.take() {
            self.state.entries.unsubscribe(id).await;
        }
        if let Some(id) = self.feed_sub.take() {
            self.state.feed.unsubscribe(id).await;
        }
    }

    // ---- commands ----

    async fn handle_command(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }

        self.touch();

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        if self.lock.is_locked() {
            return self.handle_locked_command(command, rest).await;
        }

        match command {
            "help" => self.print_help(),
            "quit" | "exit" => return Flow::Quit,

            "login" => self.cmd_login(rest, false).await,
            "signup" => self.cmd_login(rest, true).await,
            "token" => self.cmd_token(rest).await,
            "logout" => {
                if let Err(err) = auth::sign_out(&self.state).await {
                    self.set_status(err.status_line());
                }
            }

            "write" => self.cmd_write(rest).await,
            "list" => self.render(),
            "templates" => self.print_templates(),

            "trash" => {
                self.filter.trash_view = !self.filter.trash_view;
                self.render();
            }
            "archived" => {
                self.filter.show_archived = !self.filter.show_archived;
                self.render();
            }
            "mood" => self.cmd_mood_filter(rest),
            "search" => {
                self.filter.query = rest.to_string();
                self.render();
            }
            "clear" => {
                self.filter.clear_filters();
                self.set_status("Cleared");
            }

            "pin" => self.cmd_entry(rest, EntryCommand::Pin).await,
            "archive" => self.cmd_entry(rest, EntryCommand::Archive).await,
            "del" => self.cmd_entry(rest, EntryCommand::Trash).await,
            "restore" => self.cmd_entry(rest, EntryCommand::Restore).await,
            "purge" => self.cmd_entry(rest, EntryCommand::Purge).await,
            "release" => self.cmd_entry(rest, EntryCommand::Release).await,
            "copy" => self.cmd_entry(rest, EntryCommand::Copy).await,
            "share" => self.cmd_entry(rest, EntryCommand::Share).await,

            "feed" => self.cmd_feed(rest),
            "report" => self.cmd_report(rest).await,
            "unshare" => self.cmd_unshare(rest).await,

            "export" => self.cmd_export(rest).await,
            "import" => self.cmd_import(rest).await,

            "alias" => self.cmd_alias(rest).await,
            "theme" => self.cmd_theme().await,
            "pin-set" => self.cmd_pin_set(rest).await,
            "pin-off" => self.cmd_pin_off().await,
            "lock" => self.cmd_lock(),
            "autolock" => self.cmd_autolock(rest).await,
            "blur" => self.cmd_toggle_blur().await,
            "lockhide" => self.cmd_toggle_lockhide().await,
            "hide" => {
                self.hidden = true;
                self.lock.on_hidden(&self.settings);
                if self.lock.is_locked() {
                    self.render();
                }
            }
            "show" => {
                self.hidden = false;
                self.render();
            }

            _ => self.set_status(format!("Unknown command: {command} (try help)")),
        }

        Flow::Continue
    }

    /// Behind the lock screen only unlocking, leaving, and quitting work.
    async fn handle_locked_command(&mut self, command: &str, rest: &str) -> Flow {
        match command {
            "unlock" => {
                if self.lock.unlock(&self.settings, rest) {
                    self.set_status("Unlocked");
                    self.touch();
                    self.render();
                } else {
                    self.set_status("Wrong PIN");
                }
            }
            "logout" => {
                if let Err(err) = auth::sign_out(&self.state).await {
                    self.set_status(err.status_line());
                }
            }
            "quit" | "exit" => return Flow::Quit,
            _ => self.set_status("Locked. unlock <pin> to continue."),
        }
        Flow::Continue
    }

    async fn cmd_login(&mut self, rest: &str, create: bool) {
        let Some((email, password)) = rest.split_once(char::is_whitespace) else {
            self.set_status(if create {
                "Usage: signup <email> <password>"
            } else {
                "Usage: login <email> <password>"
            });
            return;
        };

        let result = if create {
            auth::sign_up(&self.state, email.trim(), password.trim()).await
        } else {
            auth::sign_in(&self.state, email.trim(), password.trim()).await
        };

        match result {
            Ok(_) => self.set_status(if create { "Account created" } else { "Welcome back" }),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    async fn cmd_token(&mut self, rest: &str) {
        match auth::sign_in_with_token(&self.state, rest).await {
            Ok(_) => self.set_status("Signed in"),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    async fn cmd_write(&mut self, rest: &str) {
        let Some((mood_word, body)) = rest.split_once(char::is_whitespace) else {
            self.set_status("Usage: write <mood> <text>");
            return;
        };
        let Some(mood) = parse_mood(mood_word) else {
            self.set_status(format!("Unknown mood: {mood_word}"));
            return;
        };

        let today = Local::now().date_naive();
        match entries::save_entry(&self.state, &mut self.settings, body, mood, today).await {
            Ok(outcome) => {
                if outcome.streak.changed {
                    self.set_status(format!("Saved • Streak: {}🔥", outcome.streak.streak));
                } else {
                    self.set_status("Saved");
                }
                println!("  {}", outcome.reflection);
            }
            Err(err) => self.set_status(err.status_line()),
        }
    }

    fn cmd_mood_filter(&mut self, rest: &str) {
        if rest.eq_ignore_ascii_case("all") {
            self.filter.mood = None;
            self.render();
            return;
        }
        match parse_mood(rest) {
            Some(mood) => {
                self.filter.mood = Some(mood);
                self.render();
            }
            None => self.set_status(format!("Unknown mood: {rest}")),
        }
    }

    async fn cmd_entry(&mut self, rest: &str, command: EntryCommand) {
        let Some(entry) = self.entry_at(rest) else {
            self.set_status("No such entry number (see list)");
            return;
        };

        let result = match command {
            EntryCommand::Pin => entries::toggle_pinned(&self.state, &entry)
                .await
                .map(|pinned| if pinned { "Pinned ⭐" } else { "Unpinned" }.to_string()),
            EntryCommand::Archive => entries::toggle_archived(&self.state, &entry)
                .await
                .map(|archived| if archived { "Archived" } else { "Unarchived" }.to_string()),
            EntryCommand::Trash => entries::move_to_trash(&self.state, &entry.id)
                .await
                .map(|_| "Moved to Trash 🗑️".to_string()),
            EntryCommand::Restore => entries::restore_from_trash(&self.state, &entry.id)
                .await
                .map(|_| "Restored".to_string()),
            EntryCommand::Purge => entries::delete_forever(&self.state, &entry.id)
                .await
                .map(|_| "Deleted forever".to_string()),
            EntryCommand::Release => entries::release(&self.state, &entry).await.map(|body| {
                println!("  🌬️  \"{}\"", shorten(&body, 80));
                println!("  Let it go. You don't have to carry this anymore.");
                "Released".to_string()
            }),
            EntryCommand::Copy => {
                println!("{}", entries::copy_text(&entry));
                Ok("Copied".to_string())
            }
            EntryCommand::Share => share::share_entry(&self.state, &self.settings, &entry)
                .await
                .map(|_| "Shared anonymously 🌍".to_string()),
        };

        match result {
            Ok(message) => self.set_status(message),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    fn cmd_feed(&mut self, rest: &str) {
        match rest {
            "on" => {
                self.show_feed = true;
                self.set_status("Public feed shown");
            }
            "off" => {
                self.show_feed = false;
                self.set_status("Public feed hidden");
            }
            _ => self.render_feed(),
        }
    }

    async fn cmd_report(&mut self, rest: &str) {
        let Some(post) = self.post_at(rest) else {
            self.set_status("No such post number (see feed)");
            return;
        };
        match share::report_post(&self.state, &post.id).await {
            Ok(()) => self.set_status("Reported. Thanks."),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    async fn cmd_unshare(&mut self, rest: &str) {
        let Some(post) = self.post_at(rest) else {
            self.set_status("No such post number (see feed)");
            return;
        };
        match share::retract_post(&self.state, &post.id).await {
            Ok(()) => self.set_status("Deleted from public"),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    async fn cmd_export(&mut self, rest: &str) {
        let (format, path) = match rest.split_once(char::is_whitespace) {
            Some((format, path)) => (format, path.trim()),
            None => {
                self.set_status("Usage: export <json|txt> <path>");
                return;
            }
        };

        let result = match format {
            "json" => backup::export_json(&self.entries, path.as_ref()).await,
            "txt" => backup::export_text(&self.entries, path.as_ref()).await,
            _ => {
                self.set_status("Usage: export <json|txt> <path>");
                return;
            }
        };

        match result {
            Ok(count) => self.set_status(format!("Backup written ({count} entries)")),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    async fn cmd_import(&mut self, rest: &str) {
        if rest.is_empty() {
            self.set_status("Usage: import <path>");
            return;
        }
        match backup::import_json(&self.state, rest.as_ref()).await {
            Ok(count) => self.set_status(format!("Imported {count}")),
            Err(err) => self.set_status(err.status_line()),
        }
    }

    async fn cmd_alias(&mut self, rest: &str) {
        match self.settings.set_alias(&*self.state.settings, rest).await {
            Ok(()) => self.set_status(format!("Anon name saved: {}", self.settings.alias)),
            Err(err) => {
                tracing::error!(error = %err, "Alias write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    async fn cmd_theme(&mut self) {
        let next = self.settings.theme.toggled();
        match self.settings.set_theme(&*self.state.settings, next).await {
            Ok(()) => self.set_status(format!("Theme: {}", next.name())),
            Err(err) => {
                tracing::error!(error = %err, "Theme write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    async fn cmd_pin_set(&mut self, rest: &str) {
        if let Err(err) = validate_pin(rest) {
            self.set_status(err.to_string());
            return;
        }
        match self
            .settings
            .set_pin(&*self.state.settings, rest.to_string(), true)
            .await
        {
            Ok(()) => {
                // Enabling the PIN locks immediately, like first setup.
                let _ = self.lock.lock(&self.settings);
                self.set_status("PIN enabled");
                self.render();
            }
            Err(err) => {
                tracing::error!(error = %err, "PIN write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    async fn cmd_pin_off(&mut self) {
        match self
            .settings
            .set_pin_enabled(&*self.state.settings, false)
            .await
        {
            Ok(()) => {
                self.lock.on_pin_disabled();
                self.lock_timer.cancel();
                self.set_status("PIN disabled");
            }
            Err(err) => {
                tracing::error!(error = %err, "PIN write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    fn cmd_lock(&mut self) {
        match self.lock.lock(&self.settings) {
            Ok(()) => {
                self.set_status("Locked");
                self.render();
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }

    async fn cmd_autolock(&mut self, rest: &str) {
        let Ok(minutes) = rest.parse::<u32>() else {
            self.set_status("Usage: autolock <minutes> (0 = off)");
            return;
        };
        match self
            .settings
            .set_auto_lock_min(&*self.state.settings, minutes)
            .await
        {
            Ok(()) => {
                self.touch();
                if minutes == 0 {
                    self.set_status("Auto-lock off");
                } else {
                    self.set_status(format!("Auto-lock: {minutes} min"));
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Auto-lock write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    async fn cmd_toggle_blur(&mut self) {
        let next = !self.settings.blur_on_hide;
        match self
            .settings
            .set_blur_on_hide(&*self.state.settings, next)
            .await
        {
            Ok(()) => self.set_status(if next {
                "Blur on hide: ON"
            } else {
                "Blur on hide: OFF"
            }),
            Err(err) => {
                tracing::error!(error = %err, "Settings write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    async fn cmd_toggle_lockhide(&mut self) {
        let next = !self.settings.lock_on_hide;
        match self
            .settings
            .set_lock_on_hide(&*self.state.settings, next)
            .await
        {
            Ok(()) => self.set_status(if next {
                "Lock on hide: ON"
            } else {
                "Lock on hide: OFF"
            }),
            Err(err) => {
                tracing::error!(error = %err, "Settings write failed");
                self.set_status("Could not save device settings.");
            }
        }
    }

    // ---- helpers ----

    /// Activity happened: reschedule (or cancel) the idle auto-lock.
    /// Only the most recent schedule can ever fire.
    fn touch(&mut self) {
        if self.settings.pin_enabled && !self.lock.is_locked() && self.settings.auto_lock_min > 0 {
            let delay = Duration::from_secs(u64::from(self.settings.auto_lock_min) * 60);
            let tx = self.events.clone();
            self.lock_timer.schedule(delay, move || {
                let _ = tx.try_send(AppEvent::AutoLock);
            });
        } else {
            self.lock_timer.cancel();
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        println!("· {message}");
        self.status = Some(message);

        let tx = self.events.clone();
        self.status_timer.schedule(STATUS_CLEAR, move || {
            let _ = tx.try_send(AppEvent::StatusExpired);
        });
    }

    /// Resolve a 1-based index into the currently visible list.
    fn entry_at(&self, rest: &str) -> Option<Entry> {
        let index: usize = rest.parse().ok()?;
        visible(&self.entries, &self.filter)
            .get(index.checked_sub(1)?)
            .map(|e| (*e).clone())
    }

    fn post_at(&self, rest: &str) -> Option<PublicPost> {
        let index: usize = rest.parse().ok()?;
        self.feed.get(index.checked_sub(1)?).cloned()
    }

    // ---- rendering ----

    fn print_welcome(&self) {
        let now = Local::now();
        let greeting = greeting_at(now);
        println!("✦ Unspoken — write. breathe. save what matters.");
        println!("{}, {}", greeting.word, greeting.sub);
        println!("✦ {}", daily_prompt(now.date_naive()));
        println!("“{}”", reminder_at(Utc::now()));
        println!(
            "{} · type help for commands",
            if self.online { "online" } else { "offline" }
        );
        if self.user.is_none() {
            println!("login <email> <password> or signup <email> <password> to begin.");
        }
    }

    fn print_help(&self) {
        println!(
            "commands:\n  \
             login/signup <email> <password> · token <id-token> · logout\n  \
             write <mood> <text> · list · templates · copy <n>\n  \
             pin/archive/del/restore/purge/release/share <n>\n  \
             trash · archived · mood <name|all> · search <text> · clear\n  \
             feed [on|off] · report <n> · unshare <n>\n  \
             export <json|txt> <path> · import <path>\n  \
             alias <name> · theme · pin-set <pin> · pin-off · lock · unlock <pin>\n  \
             autolock <min> · blur · lockhide · hide · show · quit"
        );
    }

    fn print_templates(&self) {
        for template in QUICK_TEMPLATES {
            println!("  {template}");
        }
    }

    fn render(&self) {
        if self.lock.is_locked() {
            println!("🔐 Private space. unlock <pin> to open your journal.");
            return;
        }
        if self.hidden && self.settings.blur_on_hide {
            return;
        }
        if self.user.is_none() {
            println!("Not signed in.");
            return;
        }

        let today = Local::now().date_naive();
        let vm = ViewModel::build(&self.entries, &self.filter, today, &Local);

        println!(
            "🔥 {} day{} · {} thoughts saved · {} of {} days tracked · {}",
            self.settings.streak,
            if self.settings.streak == 1 { "" } else { "s" },
            vm.saved_count,
            vm.tracked_days(),
            vm.tracker.len(),
            if self.online { "online" } else { "offline" },
        );

        println!("mood insights:");
        let scale = vm.histogram.scale_max();
        for (mood, count) in vm.histogram.iter() {
            let bar = "█".repeat(count * INSIGHT_BAR_WIDTH / scale);
            println!(
                "  {} {:<7} {bar:<width$} {count}",
                mood.glyph(),
                mood.name(),
                width = INSIGHT_BAR_WIDTH,
            );
        }

        println!("last 14 days:");
        let glyphs: Vec<&str> = vm.tracker.iter().map(|d| d.glyph()).collect();
        let labels: Vec<String> = vm.tracker.iter().map(|d| d.weekday_label()).collect();
        println!("  {}", glyphs.join("  "));
        println!("  {}", labels.join(" "));

        println!(
            "{} ({} shown):",
            if self.filter.trash_view { "trash" } else { "your thoughts" },
            vm.visible.len(),
        );
        if vm.visible.is_empty() {
            println!(
                "  {}",
                if self.filter.trash_view {
                    "Trash is empty."
                } else {
                    "No thoughts yet. write <mood> <text> - it will appear here instantly."
                }
            );
        }
        for (index, entry) in vm.visible.iter().enumerate() {
            let mood = entry
                .mood
                .map(|m| format!("{} {}", m.glyph(), m.name()))
                .unwrap_or_else(|| "🫧 —".to_string());
            let mut markers = String::new();
            if entry.pinned && !self.filter.trash_view {
                markers.push_str(" ⭐");
            }
            if entry.archived {
                markers.push_str(" 📦");
            }
            if entry.trashed {
                markers.push_str(" 🗑️");
            }
            let time = entry
                .created_at
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!("  {:>2}. {mood}{markers}  {time}", index + 1);
            println!("      {}", entry.body);
        }

        if self.show_feed && !self.feed.is_empty() {
            self.render_feed();
        }
        if let Some(status) = &self.status {
            println!("· {status}");
        }
    }

    fn render_feed(&self) {
        if !self.show_feed {
            println!("Public feed hidden. feed on to show it.");
            return;
        }
        println!("public feed ({} posts):", self.feed.len());
        if self.feed.is_empty() {
            println!("  No shared posts yet.");
        }
        for (index, post) in self.feed.iter().enumerate() {
            let mood = post.mood.map(|m| m.glyph()).unwrap_or("🫧");
            let mine = self
                .user
                .as_ref()
                .map(|u| u.id == post.owner)
                .unwrap_or(false);
            println!(
                "  {:>2}. {mood} {} · reports: {}{}",
                index + 1,
                post.alias,
                post.report_count,
                if mine { " · yours" } else { "" },
            );
            println!("      {}", shorten(&post.body, 120));
        }
    }
}

enum EntryCommand {
    Pin,
    Archive,
    Trash,
    Restore,
    Purge,
    Release,
    Copy,
    Share,
}

/// Case-insensitive mood lookup for command input.
fn parse_mood(word: &str) -> Option<Mood> {
    Mood::ALL
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(word))
}

fn shorten(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{cut}…")
    }
}
