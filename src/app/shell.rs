//! Shell: the host-facing aggregator.
//!
//! Owns the refresh controller, tree builder, navigation registry and
//! panel registry, and turns palette commands into component operations.
//! Everything runs on the host's event thread; one operation at a time.

use crate::app::config::ShellConfig;
use crate::core::command::Command;
use crate::core::notice::{notice_bus, Notice, NoticeReceiver, NoticeSender};
use crate::logging::{LogBuffer, LoggingGuard};
use crate::models::navigation::{ActionId, NavigationEntry, NavigationRegistry};
use crate::models::tree_node::TreeNode;
use crate::panel::channel::SurfaceEnd;
use crate::panel::content::{
    architecture_content, console_content, home_content, widget_content, ConsoleHandler,
    InfoHandler, PanelKind, WidgetHandler,
};
use crate::panel::registry::{PanelRegistry, SessionId};
use crate::services::ports::fs::FsProbe;
use crate::services::refresh::{InvalidationReceiver, RefreshController};
use crate::services::tree::{TreeBuilder, TreeNotice};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Companion file that must exist at the workspace root before a widget
/// panel may open.
const SERVICES_MANIFEST: &str = "services.json";

const MAX_LOG_DRAIN_PER_PUMP: usize = 1024;

/// The endpoints the host drains: notifications to show the user, and
/// tree invalidations telling the presentation layer to re-request from
/// the root.
pub struct HostEndpoints {
    pub notices: NoticeReceiver,
    pub invalidations: InvalidationReceiver,
}

pub struct Shell {
    probe: Arc<dyn FsProbe>,
    refresh: RefreshController,
    tree: TreeBuilder,
    navigation: NavigationRegistry,
    panels: PanelRegistry,
    notices: NoticeSender,
    logs: Rc<RefCell<LogBuffer>>,
    log_rx: Option<Receiver<String>>,
}

impl Shell {
    pub fn new(config: ShellConfig, probe: Arc<dyn FsProbe>) -> (Self, HostEndpoints) {
        let (notices, notice_rx) = notice_bus();
        let (refresh, invalidation_rx) = RefreshController::new(config.workspace_root.clone());
        let tree = TreeBuilder::new(Arc::clone(&probe));

        let shell = Self {
            probe,
            refresh,
            tree,
            navigation: NavigationRegistry::new(),
            panels: PanelRegistry::new(),
            notices,
            logs: Rc::new(RefCell::new(LogBuffer::new(config.log_buffer_cap))),
            log_rx: None,
        };

        (
            shell,
            HostEndpoints {
                notices: notice_rx,
                invalidations: invalidation_rx,
            },
        )
    }

    /// Wire the logging tee into the console buffer. Optional; without it
    /// the Console panel just shows nothing.
    pub fn attach_logging(&mut self, guard: &mut LoggingGuard) {
        self.log_rx = guard.take_log_rx();
    }

    pub fn navigation_entries(&self) -> &'static [NavigationEntry; 3] {
        self.navigation.entries()
    }

    /// Materialize one directory's children. `None` means the root. Tree
    /// notices become user notifications here; the listing itself is
    /// always usable.
    pub fn children_of(&self, parent: Option<&TreeNode>) -> Vec<TreeNode> {
        let listing = self.tree.children_of(self.refresh.root(), parent);
        if let Some(notice) = listing.notice {
            self.notices.send(match notice {
                TreeNotice::NoRootConfigured => Notice::NoRootConfigured,
                TreeNotice::DirectoryUnreadable(path) => Notice::DirectoryUnreadable { path },
            });
        }
        listing.nodes
    }

    /// Host notification that the workspace root changed.
    pub fn set_root(&mut self, root: Option<PathBuf>) {
        self.refresh.set_root(root);
    }

    /// Dispatch a navigation click.
    pub fn run_action(&mut self, action: ActionId) -> Option<(SessionId, SurfaceEnd)> {
        self.run_command(action.command())
    }

    /// Dispatch a palette command. Commands that open a panel return the
    /// surface end for the host to hand to the embedded surface.
    pub fn run_command(&mut self, command: Command) -> Option<(SessionId, SurfaceEnd)> {
        tracing::debug!(command = command.name(), "command dispatched");
        match command {
            Command::Activate => {
                self.notices
                    .send(Notice::Info("Bluemesh is now active!".to_string()));
                None
            }
            Command::RefreshDirectory => {
                self.refresh.refresh();
                self.notices
                    .send(Notice::Info("Directory refreshed!".to_string()));
                None
            }
            Command::OpenHome => {
                let content = home_content();
                let handler = Box::new(InfoHandler::new(&content));
                Some(self.panels.open(PanelKind::Home, content, handler))
            }
            Command::OpenConsole => {
                let content = console_content(&self.logs);
                let handler = Box::new(ConsoleHandler::new(Rc::clone(&self.logs)));
                Some(self.panels.open(PanelKind::Console, content, handler))
            }
            Command::OpenArchitectureView => {
                let content = architecture_content();
                let handler = Box::new(InfoHandler::new(&content));
                Some(self.panels.open(PanelKind::Architecture, content, handler))
            }
            Command::ShowWidget => self.open_widget(),
        }
    }

    /// Widget opens are gated on a `services.json` next to the workspace
    /// root; without it the open aborts and nothing changes.
    fn open_widget(&mut self) -> Option<(SessionId, SurfaceEnd)> {
        let manifest = match self.refresh.root() {
            Some(root) => root.join(SERVICES_MANIFEST),
            None => {
                self.notices.send(Notice::MissingPrecondition {
                    file: PathBuf::from(SERVICES_MANIFEST),
                });
                return None;
            }
        };

        if !self.probe.exists(&manifest) {
            tracing::warn!(file = %manifest.display(), "widget open aborted, manifest missing");
            self.notices
                .send(Notice::MissingPrecondition { file: manifest });
            return None;
        }

        let handler = Box::new(WidgetHandler::new(self.notices.clone()));
        Some(self.panels.open(PanelKind::Widget, widget_content(), handler))
    }

    /// Host notification that a panel surface went away.
    pub fn panel_surface_closed(&mut self, id: SessionId) {
        self.panels.close(id);
    }

    /// One cooperative turn: pull tee'd log lines into the console buffer
    /// (bounded per turn) and handle pending panel messages.
    pub fn pump(&mut self) {
        if let Some(rx) = &self.log_rx {
            for _ in 0..MAX_LOG_DRAIN_PER_PUMP {
                match rx.try_recv() {
                    Ok(line) => self.logs.borrow_mut().push(line),
                    Err(_) => break,
                }
            }
        }
        self.panels.pump();
    }

    #[cfg(test)]
    fn panels(&self) -> &PanelRegistry {
        &self.panels
    }
}
