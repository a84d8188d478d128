//! Demo records loaded into a fresh dashboard

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::application::dashboard::Stores;
use crate::domain::{
    AccessGrant, Charge, CreateBookingDto, Department, DomainResult, InventoryItem, Message, Money,
    Priority, Recipient, RevenueSource, Role, ShiftSchedule, ShiftType, Task, User,
};

/// Staff accounts, one per role. Usernames double as demo logins.
const DEMO_STAFF: &[(&str, &str, Role, Department, ShiftType)] = &[
    ("Alice Admin", "admin", Role::Admin, Department::Management, ShiftType::Morning),
    ("Marco Manager", "manager", Role::Manager, Department::Management, ShiftType::Morning),
    ("Fatima Desk", "frontdesk", Role::FrontDesk, Department::FrontOffice, ShiftType::Afternoon),
    ("Maria Lopez", "housekeeping", Role::Housekeeping, Department::Housekeeping, ShiftType::Morning),
    ("Ravi Kumar", "restaurant", Role::Restaurant, Department::FoodAndBeverage, ShiftType::Afternoon),
];

/// Fill empty stores with a small, self-consistent hotel day.
pub fn seed_demo_data(stores: &mut Stores, today: NaiveDate, now: DateTime<Utc>) -> DomainResult<()> {
    let mut staff = Vec::with_capacity(DEMO_STAFF.len());
    for (name, username, role, department, shift_type) in DEMO_STAFF {
        let user = User::new(*name, *username, *role, *department, *shift_type);
        staff.push(stores.users.insert(user)?);
    }
    let admin = staff[0].id;
    let housekeeper = staff[3].id;
    let waiter = staff[4].id;

    // ── Bookings ────────────────────────────────────────────────
    let bookings = [
        ("John Carter", "101", 0, 3, 2, Decimal::new(45000, 2), "USD"),
        ("Ingrid Weber", "204", -1, 2, 1, Decimal::new(38000, 2), "EUR"),
        ("Priya Sharma", "305", 1, 4, 3, Decimal::new(2500000, 2), "INR"),
    ];
    for (guest, room, from, nights, guests, amount, currency) in bookings {
        let check_in = today + Duration::days(from);
        stores.bookings.create_booking(CreateBookingDto {
            guest_name: guest.to_string(),
            room_number: room.to_string(),
            check_in,
            check_out: check_in + Duration::days(nights),
            guests,
            total: Money::new(amount, currency),
        })?;
    }

    // ── Messages ────────────────────────────────────────────────
    stores.messages.send(Message::new(
        admin,
        Recipient::Everyone,
        "Fire drill",
        "Fire drill at 14:00 today. Assemble at the front car park.",
        Priority::High,
    ))?;
    stores.messages.send(Message::new(
        admin,
        Recipient::Department { department: Department::Housekeeping },
        "VIP arrival",
        "Room 101 needs the VIP amenity set before 15:00.",
        Priority::Urgent,
    ))?;
    stores.messages.send(Message::new(
        housekeeper,
        Recipient::User { user_id: waiter },
        "Room service trays",
        "Trays left outside 204 and 305.",
        Priority::Normal,
    ))?;

    // ── Tasks ───────────────────────────────────────────────────
    let mut amenity = Task::new("Prepare VIP amenities for 101", Department::Housekeeping, Priority::Urgent);
    amenity.assigned_to = Some(housekeeper);
    amenity.due_at = Some(now + Duration::hours(4));
    stores.tasks.create_task(amenity)?;

    let mut ac = Task::new("Service AC unit in 305", Department::Maintenance, Priority::High);
    ac.due_at = Some(now - Duration::hours(2));
    stores.tasks.create_task(ac)?;

    stores
        .tasks
        .create_task(Task::new("Set banquet hall for 80", Department::Banquet, Priority::Normal))?;

    // ── Inventory ───────────────────────────────────────────────
    let usd = |cents: i64| Money::new(Decimal::new(cents, 2), "USD");
    stores.inventory.add_item(InventoryItem::new("Bath towels", Department::Housekeeping, 120, 40, usd(850)))?;
    stores.inventory.add_item(InventoryItem::new("Shampoo bottles", Department::Housekeeping, 18, 50, usd(120)))?;
    stores.inventory.add_item(InventoryItem::new("House red wine", Department::FoodAndBeverage, 36, 12, usd(1400)))?;
    stores.inventory.add_item(InventoryItem::new("Banquet chairs", Department::Banquet, 200, 20, usd(4500)))?;

    // ── Revenue ─────────────────────────────────────────────────
    let charges = [
        (RevenueSource::Rooms, "Room 101, night 1", Decimal::new(15000, 2), "USD"),
        (RevenueSource::Rooms, "Room 204, night 2", Decimal::new(19000, 2), "EUR"),
        (RevenueSource::Restaurant, "Dinner for two", Decimal::new(640000, 2), "INR"),
        (RevenueSource::RoomService, "Breakfast tray", Decimal::new(2800, 2), "GBP"),
        (RevenueSource::Banquet, "Conference deposit", Decimal::new(30000000, 2), "JPY"),
    ];
    for (source, description, amount, currency) in charges {
        let mut charge = Charge::new(source, description, Money::new(amount, currency));
        charge.posted_at = now;
        stores.charges.post(charge)?;
    }

    // ── Shifts and access ───────────────────────────────────────
    for user in &staff {
        let shift = ShiftSchedule::new(user.id, today, user.current_shift.shift_type);
        stores.shifts.insert(shift)?;
    }
    stores
        .access_grants
        .grant(AccessGrant::new(housekeeper, "Linen store", admin, now, None))?;

    info!(
        users = stores.users.len(),
        bookings = stores.bookings.len(),
        charges = stores.charges.len(),
        "Demo data loaded"
    );
    Ok(())
}
