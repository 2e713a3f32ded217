use anyhow::{Context, Result, bail};
use todo_list_core::{Item, TodoList};
use tracing::{info, warn};

use crate::Command;
use crate::config::{SAMPLE_ITEMS, SAMPLE_TITLE};

/// Apply `command` to `list` and return the text to print.
pub fn run(command: Command, list: &mut TodoList) -> Result<String> {
    match command {
        Command::Show { json } => handle_show(list, json),
        Command::Done { index } => {
            list.mark_done_at(index)
                .with_context(|| format!("cannot mark item {index} done"))?;
            info!(index, "marked item done");
            Ok(list.render())
        }
        Command::Undone { index } => {
            list.mark_undone_at(index)
                .with_context(|| format!("cannot mark item {index} undone"))?;
            info!(index, "marked item undone");
            Ok(list.render())
        }
        Command::DoneTitle { title } => {
            if list.mark_done_by_title(&title) {
                info!(%title, "marked item done");
            } else {
                warn!(%title, "no item with this title");
            }
            Ok(list.render())
        }
        Command::Remove { index } => {
            let removed = list
                .remove_at(index)
                .with_context(|| format!("cannot remove item {index}"))?;
            info!(index, title = removed.title(), "removed item");
            Ok(list.render())
        }
        Command::AllDone => {
            list.mark_all_done();
            info!(count = list.len(), "marked all items done");
            Ok(list.render())
        }
        Command::AllUndone => {
            list.mark_all_undone();
            info!(count = list.len(), "marked all items undone");
            Ok(list.render())
        }
        Command::Pending => Ok(render_lines(&list.all_not_done())),
        Command::Completed => Ok(render_lines(&list.all_done())),
        Command::Find { title } => match list.find_by_title(&title) {
            Some(item) => Ok(item.render()),
            None => bail!("no item titled {title:?} in {:?}", list.title()),
        },
        Command::Demo => Ok(handle_demo()),
    }
}

fn handle_show(list: &TodoList, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(list).context("failed to encode list as JSON");
    }
    Ok(list.render())
}

/// Builds the sample list, marks everything done and lists the items.
fn handle_demo() -> String {
    let list = TodoList::with_items(SAMPLE_TITLE, SAMPLE_ITEMS.map(Item::new));
    list.mark_all_done();
    render_lines(&list.to_vec())
}

fn render_lines(items: &[Item]) -> String {
    items.iter().map(Item::render).collect::<Vec<_>>().join("\n")
}
