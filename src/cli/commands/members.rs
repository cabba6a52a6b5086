use crate::api::{ClickUpClient, MemberDirectory};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::Table;

/// Handle the `members` command: print employee code → member id.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let client = ClickUpClient::new(cfg)?;
    let mut members = client.list_members()?;
    members.sort_by(|a, b| a.code.cmp(&b.code));

    header(format!("{} members", members.len()));

    let mut table = Table::new(vec!["Code".into(), "Member ID".into(), "Username".into()]);
    for m in members {
        table.add_row(vec![m.code, m.id, m.username]);
    }
    print!("{}", table.render());
    Ok(())
}
