use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context as _, Result};
use clap::{Args, Parser, Subcommand};
use poidb_application::prelude as flows;
use poidb_core::{
    authorization::RoleBasedAbility,
    entities::*,
    usecases::{self, InterestPointAttributes, NewImage},
};
use poidb_db_sqlite::Connections;
use poidb_gateways::storage::FileSystemStorage;

use crate::{config::Config, gateways};

#[derive(Parser, Debug)]
#[command(
    name = "poidb",
    about = "Manage user contributed points of interest",
    version
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Act as the user with this id
    #[arg(long, global = true)]
    user_id: Option<i64>,

    /// Role of the acting user
    #[arg(long, global = true, default_value = "user")]
    role: Role,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List interest points
    List {
        /// Include all readable interest points, not only approved ones
        #[arg(long)]
        all: bool,
    },
    /// Show a single interest point and its images
    Show { id: String },
    /// Contribute a new interest point
    Create {
        #[command(flatten)]
        attributes: AttributeArgs,
        /// Image files to attach
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Replace the attributes of an interest point
    Update {
        id: String,
        /// The revision the changes are based on [default: current]
        #[arg(long)]
        version: Option<u64>,
        #[command(flatten)]
        attributes: AttributeArgs,
        /// Image files to attach
        #[arg(long = "image")]
        images: Vec<PathBuf>,
        /// Ids of images to remove
        #[arg(long = "remove-image")]
        removed_images: Vec<String>,
        /// Id of the image to use as default
        #[arg(long)]
        default_image: Option<String>,
    },
    /// Approve a revision of an interest point
    Approve {
        id: String,
        #[arg(long)]
        version: u64,
    },
    /// Delete an interest point
    Delete { id: String },
    /// List all categories
    Categories,
    /// Add a new category
    AddCategory { name: String },
}

#[derive(Args, Debug, Default)]
struct AttributeArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    summary: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,
    #[arg(long = "line-1")]
    line_1: Option<String>,
    #[arg(long = "line-2")]
    line_2: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    zip: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

impl AttributeArgs {
    /// Overrides the given attributes with all arguments
    /// that have been specified.
    fn merge_into(self, attributes: InterestPointAttributes) -> InterestPointAttributes {
        let Self {
            name,
            summary,
            lat,
            lng,
            line_1,
            line_2,
            city,
            state,
            zip,
            category,
        } = self;
        InterestPointAttributes {
            name: name.unwrap_or(attributes.name),
            summary: summary.unwrap_or(attributes.summary),
            address_line_1: line_1.or(attributes.address_line_1),
            address_line_2: line_2.or(attributes.address_line_2),
            city: city.or(attributes.city),
            state: state.or(attributes.state),
            zip: zip.or(attributes.zip),
            latitude: lat.or(attributes.latitude),
            longitude: lng.or(attributes.longitude),
            category_id: category.or(attributes.category_id),
        }
    }
}

struct Backend {
    connections: Connections,
    storage: FileSystemStorage,
    ability: RoleBasedAbility,
    cfg: Config,
}

impl Backend {
    fn init(cfg: Config) -> Result<Self> {
        log::info!(
            "Connecting to SQLite database '{}' (pool size = {})",
            cfg.db.conn_sqlite,
            cfg.db.conn_pool_size
        );
        let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
        poidb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
        let storage = FileSystemStorage::new(&cfg.storage.upload_dir);
        Ok(Self {
            connections,
            storage,
            ability: RoleBasedAbility,
            cfg,
        })
    }

    fn store_image(&self, acting_user: Option<&User>, path: &Path) -> Result<NewImage> {
        let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("Invalid image file name: {}", path.display()))?;
        Ok(flows::store_image_file(
            &self.storage,
            &self.ability,
            acting_user,
            file_name,
            &data,
        )?)
    }

    /// Either all files are stored or none.
    fn store_images(&self, acting_user: Option<&User>, files: &[PathBuf]) -> Result<Vec<NewImage>> {
        let mut stored = Vec::with_capacity(files.len());
        for path in files {
            match self.store_image(acting_user, path) {
                Ok(image) => stored.push(image),
                Err(err) => {
                    flows::discard_image_files(&self.storage, &stored);
                    return Err(err);
                }
            }
        }
        Ok(stored)
    }
}

pub fn run() -> Result<()> {
    let Cli {
        config,
        user_id,
        role,
        command,
    } = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(config)?;
    let acting_user = user_id.map(|id| User {
        id: id.into(),
        role,
    });
    let acting_user = acting_user.as_ref();
    let backend = Backend::init(cfg)?;

    match command {
        Command::List { all } => {
            let interest_points = if all {
                flows::load_readable_interest_points(
                    &backend.connections,
                    &backend.ability,
                    acting_user,
                )?
            } else {
                flows::load_active_interest_points(&backend.connections)?
            };
            for ip in &interest_points {
                print_summary(ip);
            }
        }
        Command::Show { id } => {
            let (ip, images) =
                flows::load_interest_point(&backend.connections, &backend.ability, acting_user, &id)?;
            print_details(&ip, &images);
        }
        Command::Create { attributes, images } => {
            let notify = gateways::notification_gateway(&backend.cfg)?;
            let uploaded = backend.store_images(acting_user, &images)?;
            let new_interest_point = usecases::NewInterestPoint {
                attributes: attributes.merge_into(Default::default()),
                contributor_id: acting_user.map(|u| u.id),
                images: uploaded.clone(),
            };
            let (ip, images) = flows::create_interest_point(
                &backend.connections,
                &backend.ability,
                &*notify,
                acting_user,
                new_interest_point,
            )
            .inspect_err(|_| flows::discard_image_files(&backend.storage, &uploaded))?;
            print_details(&ip, &images);
        }
        Command::Update {
            id,
            version,
            attributes,
            images,
            removed_images,
            default_image,
        } => {
            let (current, _) =
                flows::load_interest_point(&backend.connections, &backend.ability, acting_user, &id)?;
            let uploaded = backend.store_images(acting_user, &images)?;
            let update = usecases::UpdateInterestPoint {
                version: version.unwrap_or_else(|| current.revision.into()),
                attributes: attributes.merge_into((&current).into()),
                new_images: uploaded.clone(),
                removed_images,
                default_image_id: default_image,
            };
            let (ip, images) = flows::update_interest_point(
                &backend.connections,
                &backend.ability,
                &backend.storage,
                acting_user,
                &id,
                update,
            )
            .inspect_err(|_| flows::discard_image_files(&backend.storage, &uploaded))?;
            print_details(&ip, &images);
        }
        Command::Approve { id, version } => {
            let ip = flows::approve_interest_point(
                &backend.connections,
                &backend.ability,
                acting_user,
                &id,
                version.into(),
            )?;
            print_summary(&ip);
        }
        Command::Delete { id } => {
            flows::delete_interest_point(
                &backend.connections,
                &backend.ability,
                &backend.storage,
                acting_user,
                &id,
            )?;
            println!("Deleted {id}");
        }
        Command::Categories => {
            for category in flows::load_categories(&backend.connections)? {
                println!("{}\t{}", category.id, category.name);
            }
        }
        Command::AddCategory { name } => {
            let category = flows::create_category(&backend.connections, acting_user, &name)?;
            println!("{}\t{}", category.id, category.name);
        }
    }
    Ok(())
}

fn print_summary(ip: &InterestPoint) {
    let status = if ip.is_approved() { "approved" } else { "pending" };
    println!("{}\t{}\t{}\t{}", ip.id, ip.revision, status, ip.name);
}

fn print_details(ip: &InterestPoint, images: &[Image]) {
    println!("id:            {}", ip.id);
    println!("revision:      {}", ip.revision);
    println!("name:          {}", ip.name);
    if !ip.summary.is_empty() {
        println!("summary:       {}", ip.summary);
    }
    if let Some(pos) = ip.location.pos {
        println!("position:      {pos}");
    }
    if let Some(address) = &ip.location.address {
        let parts = [
            &address.line_1,
            &address.line_2,
            &address.zip,
            &address.city,
            &address.state,
        ];
        let line: Vec<_> = parts.into_iter().flatten().map(String::as_str).collect();
        println!("address:       {}", line.join(", "));
    }
    if let Some(category) = &ip.category {
        println!("category:      {category}");
    }
    println!("contributor:   {}", ip.contributor);
    match &ip.approval {
        Some(approval) => println!(
            "approved:      by {} at {}",
            approval.approver, approval.approved_at
        ),
        None => println!("approved:      no"),
    }
    for image in images {
        let marker = if ip.default_image.as_ref() == Some(&image.id) {
            " (default)"
        } else {
            ""
        };
        println!("image:         {} {}{marker}", image.id, image.file_url);
    }
}
