
pub mod prelude {

    use std::cell::RefCell;

    pub use poidb_core::{
        authorization::RoleBasedAbility,
        entities::*,
        gateways::{
            notify::{NotificationEvent, NotificationGateway},
            storage::FileStorageGateway,
        },
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Records the ids of all added interest points.
    #[derive(Default)]
    pub struct RecordingNotifyGW {
        pub added: RefCell<Vec<(Id, Option<Id>)>>,
    }

    impl NotificationGateway for RecordingNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            match event {
                NotificationEvent::InterestPointAdded { interest_point, .. } => {
                    self.added.borrow_mut().push((
                        interest_point.id.clone(),
                        interest_point.default_image.clone(),
                    ));
                }
            }
        }
    }

    /// Keeps stored files in memory.
    #[derive(Default)]
    pub struct InMemoryStorage {
        pub files: RefCell<Vec<String>>,
        pub deleted: RefCell<Vec<String>>,
    }

    impl FileStorageGateway for InMemoryStorage {
        fn store_file(&self, file_name: &str, _data: &[u8]) -> anyhow::Result<String> {
            let file_url = format!("image/{}/{file_name}", Id::new());
            self.files.borrow_mut().push(file_url.clone());
            Ok(file_url)
        }
        fn delete_file(&self, file_url: &str) -> anyhow::Result<()> {
            self.deleted.borrow_mut().push(file_url.to_owned());
            Ok(())
        }
    }

    pub fn user(id: i64) -> User {
        User {
            id: id.into(),
            role: Role::User,
        }
    }

    pub fn admin(id: i64) -> User {
        User {
            id: id.into(),
            role: Role::Admin,
        }
    }

    pub fn new_interest_point(name: &str, lat: f64, lng: f64) -> usecases::NewInterestPoint {
        usecases::NewInterestPoint {
            attributes: usecases::InterestPointAttributes {
                name: name.into(),
                latitude: Some(lat),
                longitude: Some(lng),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub ability: RoleBasedAbility,
        pub notify: RecordingNotifyGW,
        pub storage: InMemoryStorage,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            poidb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                ability: RoleBasedAbility,
                notify: RecordingNotifyGW::default(),
                storage: InMemoryStorage::default(),
            }
        }

        pub fn create_interest_point(
            &self,
            acting_user: &User,
            new_interest_point: usecases::NewInterestPoint,
        ) -> (InterestPoint, Vec<Image>) {
            flows::create_interest_point(
                &self.db_connections,
                &self.ability,
                &self.notify,
                Some(acting_user),
                new_interest_point,
            )
            .unwrap()
        }

        pub fn attach_image(&self, acting_user: &User, file_name: &str) -> usecases::NewImage {
            flows::store_image_file(
                &self.storage,
                &self.ability,
                Some(acting_user),
                file_name,
                b"JPEG",
            )
            .unwrap()
        }

        pub fn try_get_interest_point(&self, id: &str) -> Option<InterestPoint> {
            match self.db_connections.shared().unwrap().get_interest_point(id) {
                Ok(interest_point) => Some(interest_point),
                Err(RepoError::NotFound) => None,
                Err(err) => panic!("{err}"),
            }
        }

        pub fn count_interest_points(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_interest_points()
                .unwrap()
        }
    }
}
