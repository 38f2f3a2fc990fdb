use crate::cmd::show;
use crate::session::Session;
use std::path::Path;

pub fn run(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    let transition = session.controller.request_reset()?;
    if session.resolve(transition)? && !json {
        println!("Round reset.");
    }
    show::print(&mut session, json)
}
