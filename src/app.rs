//! Root application module.
//!
//! Contains the App component, the AppContext shared by every section, and
//! TerminalState, the reactive wrapper around [`TerminalSession`].

use folio_core::{ExecuteOutcome, HistoryDirection, SectionTracker, TerminalSession};
use leptos::prelude::*;

use crate::components::{
    About, Achievements, Contact, Experience, Footer, Header, Hero, Projects, Skills, Toaster,
};
use crate::hooks::use_scroll_spy;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal session held in a signal.
///
/// Every mutation goes through the session's own operations, so the
/// transcript, input buffer and history cursor always change together.
#[derive(Clone, Copy)]
pub struct TerminalState {
    pub session: RwSignal<TerminalSession>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(TerminalSession::new()),
        }
    }

    /// Execute the current input buffer.
    pub fn submit(&self) -> ExecuteOutcome {
        let outcome = self
            .session
            .try_update(|s| {
                let line = s.current_command().to_string();
                s.execute(&line)
            })
            .unwrap_or(ExecuteOutcome::Ignored);
        if outcome == ExecuteOutcome::Cleared {
            web_sys::console::debug_1(&"terminal cleared".into());
        }
        outcome
    }

    /// Fill the buffer with a shortcut and execute it.
    pub fn run_quick(&self, command: &str) {
        self.session.update(|s| {
            s.run_quick(command);
        });
    }

    pub fn navigate_history(&self, direction: HistoryDirection) {
        self.session.update(|s| s.navigate_history(direction));
    }

    pub fn set_input(&self, text: String) {
        self.session.update(|s| s.set_current_command(text));
    }

    pub fn input(&self) -> String {
        self.session.with(|s| s.current_command().to_string())
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Toast
// ============================================================================

/// Transient notification shown in the corner of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub is_error: bool,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_error: false,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_error: true,
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Hero terminal.
    pub terminal: TerminalState,

    /// Section currently in view, driven by the scroll spy.
    pub sections: RwSignal<SectionTracker>,

    /// Mobile navigation drawer.
    pub menu_open: RwSignal<bool>,

    /// Notification currently displayed, if any.
    pub toast: RwSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
            sections: RwSignal::new(SectionTracker::default()),
            menu_open: RwSignal::new(false),
            toast: RwSignal::new(None),
        }
    }

    /// Scroll smoothly to a section and close the mobile menu.
    pub fn navigate_to(&self, id: &str) {
        crate::hooks::scroll_to_section(self.sections, id);
        self.menu_open.set(false);
    }

    pub fn notify(&self, toast: Toast) {
        self.toast.set(Some(toast));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root component.
///
/// Provides the [`AppContext`], starts the scroll spy and lays out the
/// page sections inside an ErrorBoundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    use_scroll_spy(ctx.sections);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorScreen>
                    <div class=css::errorPanel>
                        <h1 class=css::errorTitle>"Something went wrong"</h1>
                        <p class=css::errorText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::errorDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reloadButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <div class=css::page>
                <Header />
                <main>
                    <Hero />
                    <About />
                    <Experience />
                    <Projects />
                    <Skills />
                    <Achievements />
                    <Contact />
                </main>
                <Footer />
                <Toaster />
            </div>
        </ErrorBoundary>
    }
}
