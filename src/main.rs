// Copyright (C) 2021 Bosutech XXI S.L.
//
// nucliadb is offered under the AGPL v3.0 and as commercial software.
// For commercial licensing, contact us at info@nuclia.com.
//
// AGPL:
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//


use clap::{Parser, Subcommand};
use comarca::contact::contact_links;
use comarca::ratings::RatingSummary;
use comarca::submission::{NewEntry, SubmissionOutcome};
use comarca::{Directory, EnvSettings, JsonSheetStore, telemetry};
use comarca_types::{Record, Stars};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Community directory of services, activities and food vendors
#[derive(Parser)]
#[command(name = "comarca")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the categories that can be browsed
    Categories,
    /// Show the entries of a category matching a query, or all of them
    Search {
        category: String,
        #[arg(default_value = "")]
        query: String,
    },
    /// Propose a new entry for a category
    Add {
        category: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        trade: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        zone: Option<String>,
        #[arg(long)]
        submitter: Option<String>,
    },
    /// Rate an entry from 1 to 5 stars
    Rate {
        category: String,
        subject: String,
        stars: i64,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Show the rating of an entry
    Ratings { category: String, subject: String },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    let settings = EnvSettings::from_env()?;
    telemetry::init(&settings.telemetry)?;

    let store = JsonSheetStore::new(&settings.data_dir);
    let directory = Directory::from_settings(store, &settings)?;

    match opt.command {
        Command::Categories => directory.categories().for_each(|category| println!("{category}")),
        Command::Search { category, query } => {
            let records = directory.search(&category, &query)?;
            let ratings = directory.ratings()?;
            let category = &directory.category(&category)?.name;
            for record in &records {
                print_record(&directory, record);
                let subject = record.text(&directory.settings().columns.name);
                if let Some(summary) = RatingSummary::for_subject(&ratings, &subject, category) {
                    println!("Valoración promedio: {summary}");
                }
            }
            println!("---\n{} resultado(s)", records.len());
        }
        Command::Add {
            category,
            name,
            trade,
            phone,
            zone,
            submitter,
        } => {
            let entry = NewEntry {
                name,
                trade,
                phone,
                zone,
                submitter,
            };
            match directory.submit(&category, &entry, now())? {
                SubmissionOutcome::Added { .. } => println!("¡Gracias! El servicio fue agregado correctamente."),
                SubmissionOutcome::Duplicate { existing } => {
                    println!("Ya existe un servicio con ese teléfono y rubro en esta categoría:");
                    print_record(&directory, &existing);
                }
            }
        }
        Command::Rate {
            category,
            subject,
            stars,
            comment,
        } => {
            directory.rate(&category, &subject, Stars::new(stars)?, comment, now())?;
            println!("¡Gracias por tu valoración!");
        }
        Command::Ratings { category, subject } => match directory.rating_summary(&category, &subject)? {
            Some(summary) => println!("{subject}: {summary}"),
            None => println!("Aún no hay valoraciones para {subject}."),
        },
    }

    Ok(())
}

fn print_record(directory: &Directory<JsonSheetStore>, record: &Record) {
    println!("---");
    for (column, value) in record.iter().filter(|(_, value)| !value.is_empty()) {
        println!("{column}: {value}");
    }
    for link in contact_links(record, directory.phone_format()) {
        match link.whatsapp {
            Some(whatsapp) => println!("  {} | {whatsapp}", link.call),
            None => println!("  {}", link.call),
        }
    }
}

fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}
