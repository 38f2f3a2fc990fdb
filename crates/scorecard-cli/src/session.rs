use crate::services::{AssumeYes, Prompter, StdinPrompter, TerminalFeedback};
use anyhow::Context;
use scorecard_core::config::{Config, WarnLevel};
use scorecard_core::store::FileStore;
use scorecard_core::{RoundController, Transition};
use std::path::Path;

pub type Controller = RoundController<FileStore, TerminalFeedback>;

/// One CLI invocation's view of the persisted round.
pub struct Session {
    pub controller: Controller,
    prompter: Box<dyn Prompter>,
}

impl Session {
    pub fn open(root: &Path, assume_yes: bool) -> anyhow::Result<Self> {
        let config = Config::load(root).context("failed to load config")?;
        if let Some(err) = config
            .validate()
            .into_iter()
            .find(|w| w.level == WarnLevel::Error)
        {
            anyhow::bail!("invalid config: {}", err.message);
        }
        let store = FileStore::new(config.round_path(root));
        let feedback = TerminalFeedback::new(config.feedback.clone());
        let controller = RoundController::open(store, feedback);
        let prompter: Box<dyn Prompter> = if assume_yes {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinPrompter)
        };
        let mut session = Self {
            controller,
            prompter,
        };
        session.report_notices();
        Ok(session)
    }

    /// Drive pending decisions to completion by prompting. Returns `false`
    /// when the player declined one of them.
    pub fn resolve(&mut self, mut transition: Transition) -> anyhow::Result<bool> {
        while let Transition::Pending(decision) = transition {
            if !self.prompter.ask(&decision.title, &decision.message) {
                self.controller.cancel(decision.id)?;
                eprintln!("Cancelled.");
                return Ok(false);
            }
            transition = self.controller.confirm(decision.id)?;
        }
        self.report_notices();
        Ok(true)
    }

    /// Print queued storage problems; they never fail the command.
    pub fn report_notices(&mut self) {
        for notice in self.controller.take_notices() {
            eprintln!("warning: {notice}");
        }
    }
}
