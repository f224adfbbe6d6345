use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cars table
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cars::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Cars::Name).string().not_null())
                    .col(ColumnDef::new(Cars::Brand).string().not_null())
                    .col(ColumnDef::new(Cars::Category).string().not_null())
                    .col(ColumnDef::new(Cars::Price).big_integer().not_null())
                    .col(ColumnDef::new(Cars::Year).integer().not_null())
                    .col(ColumnDef::new(Cars::Mileage).integer().not_null().default(0))
                    .col(ColumnDef::new(Cars::FuelType).string().not_null())
                    .col(ColumnDef::new(Cars::Transmission).string().not_null())
                    .col(ColumnDef::new(Cars::Description).string().null())
                    .col(ColumnDef::new(Cars::ImageUrl).string().null())
                    .col(ColumnDef::new(Cars::Featured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Cars::Status).string().not_null().default("available"))
                    .col(ColumnDef::new(Cars::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Cars::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cars_brand")
                    .table(Cars::Table)
                    .col(Cars::Brand)
                    .to_owned(),
            )
            .await?;

        // Create inquiries table
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Inquiries::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Inquiries::CarId).string().null())
                    .col(ColumnDef::new(Inquiries::CustomerName).string().not_null())
                    .col(ColumnDef::new(Inquiries::CustomerEmail).string().not_null())
                    .col(ColumnDef::new(Inquiries::CustomerPhone).string().null())
                    .col(ColumnDef::new(Inquiries::Message).string().not_null())
                    .col(ColumnDef::new(Inquiries::Kind).string().not_null())
                    .col(ColumnDef::new(Inquiries::Status).string().not_null().default("new"))
                    .col(ColumnDef::new(Inquiries::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Inquiries::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create contact_messages table
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ContactMessages::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Subject).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Message).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Status).string().not_null().default("unread"))
                    .col(ColumnDef::new(ContactMessages::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create test_drive_bookings table
        manager
            .create_table(
                Table::create()
                    .table(TestDriveBookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestDriveBookings::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(TestDriveBookings::UserId).string().null())
                    .col(ColumnDef::new(TestDriveBookings::CarName).string().not_null())
                    .col(ColumnDef::new(TestDriveBookings::CustomerName).string().not_null())
                    .col(ColumnDef::new(TestDriveBookings::CustomerEmail).string().not_null())
                    .col(ColumnDef::new(TestDriveBookings::CustomerPhone).string().not_null())
                    .col(ColumnDef::new(TestDriveBookings::PreferredDate).string().not_null())
                    .col(ColumnDef::new(TestDriveBookings::PreferredTime).string().not_null())
                    .col(ColumnDef::new(TestDriveBookings::Status).string().not_null().default("pending"))
                    .col(ColumnDef::new(TestDriveBookings::Notes).string().null())
                    .col(ColumnDef::new(TestDriveBookings::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_drive_bookings_user_id")
                    .table(TestDriveBookings::Table)
                    .col(TestDriveBookings::UserId)
                    .to_owned(),
            )
            .await?;

        // Create trade_in_requests table
        manager
            .create_table(
                Table::create()
                    .table(TradeInRequests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TradeInRequests::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(TradeInRequests::UserId).string().null())
                    .col(ColumnDef::new(TradeInRequests::VehicleMake).string().not_null())
                    .col(ColumnDef::new(TradeInRequests::VehicleModel).string().not_null())
                    .col(ColumnDef::new(TradeInRequests::VehicleYear).integer().not_null())
                    .col(ColumnDef::new(TradeInRequests::Mileage).integer().not_null())
                    .col(ColumnDef::new(TradeInRequests::Condition).string().not_null())
                    .col(ColumnDef::new(TradeInRequests::CustomerName).string().not_null())
                    .col(ColumnDef::new(TradeInRequests::CustomerEmail).string().not_null())
                    .col(ColumnDef::new(TradeInRequests::CustomerPhone).string().null())
                    .col(ColumnDef::new(TradeInRequests::Status).string().not_null().default("pending"))
                    .col(ColumnDef::new(TradeInRequests::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create service_requests table
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ServiceRequests::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(ServiceRequests::UserId).string().null())
                    .col(ColumnDef::new(ServiceRequests::Name).string().not_null())
                    .col(ColumnDef::new(ServiceRequests::Email).string().not_null())
                    .col(ColumnDef::new(ServiceRequests::Phone).string().not_null())
                    .col(ColumnDef::new(ServiceRequests::ServiceType).string().not_null())
                    .col(ColumnDef::new(ServiceRequests::VehicleDetails).string().null())
                    .col(ColumnDef::new(ServiceRequests::PreferredDate).string().null())
                    .col(ColumnDef::new(ServiceRequests::Notes).string().null())
                    .col(ColumnDef::new(ServiceRequests::Status).string().not_null().default("pending"))
                    .col(ColumnDef::new(ServiceRequests::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create favorites table
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).string().not_null())
                    .col(ColumnDef::new(Favorites::CarId).string().not_null())
                    .col(ColumnDef::new(Favorites::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_id_car_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::CarId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TradeInRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestDriveBookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Name,
    Brand,
    Category,
    Price,
    Year,
    Mileage,
    FuelType,
    Transmission,
    Description,
    ImageUrl,
    Featured,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    CarId,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    Message,
    Kind,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TestDriveBookings {
    Table,
    Id,
    UserId,
    CarName,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    PreferredDate,
    PreferredTime,
    Status,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TradeInRequests {
    Table,
    Id,
    UserId,
    VehicleMake,
    VehicleModel,
    VehicleYear,
    Mileage,
    Condition,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ServiceRequests {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    ServiceType,
    VehicleDetails,
    PreferredDate,
    Notes,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CarId,
    CreatedAt,
}
