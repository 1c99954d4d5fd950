pub use sea_orm_migration::prelude::*;

mod m20251018_000001_planets;
mod m20251018_000002_people;
mod m20251018_000003_vehicles;
mod m20251018_000004_users;
mod m20251018_000005_user_people;
mod m20251018_000006_user_planets;
mod m20251018_000007_user_vehicles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_planets::Migration),
            Box::new(m20251018_000002_people::Migration),
            Box::new(m20251018_000003_vehicles::Migration),
            Box::new(m20251018_000004_users::Migration),
            Box::new(m20251018_000005_user_people::Migration),
            Box::new(m20251018_000006_user_planets::Migration),
            Box::new(m20251018_000007_user_vehicles::Migration),
        ]
    }
}
