// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            conn.execute("INSERT INTO users(username) VALUES (?1)", params![name])?;
            println!("Added user '{}'", name);
        }
        Some(("list", _)) => {
            let mut stmt =
                conn.prepare("SELECT username, created_at FROM users ORDER BY username")?;
            let rows = stmt.query_map([], |r| {
                Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
            })?;
            let mut data = Vec::new();
            for row in rows {
                let (name, created) = row?;
                data.push(vec![name, created]);
            }
            println!("{}", pretty_table(&["Username", "Created"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            // ON DELETE CASCADE drops the user's records with them.
            conn.execute("DELETE FROM users WHERE username=?1", params![name])?;
            println!("Removed user '{}' and their records", name);
        }
        _ => {}
    }
    Ok(())
}
