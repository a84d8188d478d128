//! Dashboard: owns the stores and wires the services to the signed-in session
//!
//! This is the single entry point a front end talks to. Every operation
//! that needs an actor uses the current session user.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::navigation::{Navigation, Navigator};
use crate::application::seed::seed_demo_data;
use crate::application::services::{
    AuthService, BrandingService, CurrencyService, RevenueService, RevenueSummary, SharedClock,
    ShiftService, SystemClock, TimeFormatter,
};
use crate::config::AppConfig;
use crate::domain::{
    BrandingConfig, Charge, DomainError, DomainResult, FilteredRecords, HotelSettings, Module,
    ModuleFilter, Role, SecurityEventKind, SecurityLog, Severity, ShiftSchedule, ShiftType, User,
};
use crate::infrastructure::storage::{default_storage_dir, FileKeyValueStorage};
use crate::infrastructure::{
    AccessGrantStore, BookingStore, ChargeStore, InventoryStore, KeyValueStorage,
    MemoryKeyValueStorage, MessageStore, SecurityLogStore, ShiftStore, TaskStore, UserStore,
};
use crate::shared::AppResult;

/// Every in-memory collection the dashboard works on
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub users: UserStore,
    pub bookings: BookingStore,
    pub messages: MessageStore,
    pub tasks: TaskStore,
    pub inventory: InventoryStore,
    pub security_logs: SecurityLogStore,
    pub access_grants: AccessGrantStore,
    pub charges: ChargeStore,
    pub shifts: ShiftStore,
}

/// Signed-in user and their navigation state
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub navigator: Navigator,
}

pub struct Dashboard {
    pub stores: Stores,
    storage: Box<dyn KeyValueStorage>,
    clock: SharedClock,
    time: TimeFormatter,
    currency: CurrencyService,
    branding: BrandingService,
    session: Option<Session>,
}

impl Dashboard {
    pub fn new(config: &AppConfig, storage: Box<dyn KeyValueStorage>, clock: SharedClock) -> AppResult<Self> {
        let currency = CurrencyService::new(config.rate_table()?, config.settings())?;
        let branding = BrandingService::load(storage.as_ref(), config.default_branding());
        let time = TimeFormatter::from_branding(clock.clone(), branding.config());

        info!(
            hotel = %branding.config().hotel_name,
            time_zone = %time.zone().name(),
            display_currency = %currency.display_currency(),
            "Dashboard ready"
        );

        Ok(Self {
            stores: Stores::default(),
            storage,
            clock,
            time,
            currency,
            branding,
            session: None,
        })
    }

    /// Storage and clock as described by the config file.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let storage: Box<dyn KeyValueStorage> = if config.storage.in_memory {
            Box::new(MemoryKeyValueStorage::new())
        } else {
            let dir = config.storage.dir.clone().unwrap_or_else(default_storage_dir);
            Box::new(FileKeyValueStorage::open(dir)?)
        };
        Self::new(config, storage, std::sync::Arc::new(SystemClock))
    }

    pub fn with_demo_data(mut self) -> DomainResult<Self> {
        let today = self.time.today();
        let now = self.clock.now();
        seed_demo_data(&mut self.stores, today, now)?;
        Ok(self)
    }

    pub fn time(&self) -> &TimeFormatter {
        &self.time
    }

    pub fn currency(&self) -> &CurrencyService {
        &self.currency
    }

    pub fn branding(&self) -> &BrandingConfig {
        self.branding.config()
    }

    // ── Session ─────────────────────────────────────────────────

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn login(&mut self, username: &str) -> AppResult<&Session> {
        let auth = AuthService::new(self.clock.as_ref());
        let user = auth.login(
            &mut self.stores.users,
            &mut self.stores.security_logs,
            self.storage.as_mut(),
            username,
        )?;
        let navigator = Navigator::for_user(&user);
        Ok(self.session.insert(Session { user, navigator }))
    }

    /// Resume the persisted session, if its user still exists and is active.
    pub fn restore_session(&mut self) -> AppResult<Option<&Session>> {
        let auth = AuthService::new(self.clock.as_ref());
        let user = auth.restore_session(&self.stores.users, self.storage.as_mut())?;
        self.session = user.map(|user| Session {
            navigator: Navigator::for_user(&user),
            user,
        });
        Ok(self.session.as_ref())
    }

    pub fn logout(&mut self) -> AppResult<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        let auth = AuthService::new(self.clock.as_ref());
        auth.logout(&mut self.stores.security_logs, self.storage.as_mut(), &session.user)
    }

    fn actor(&self) -> DomainResult<User> {
        self.current_user()
            .cloned()
            .ok_or_else(|| DomainError::Unauthorized("Not signed in".into()))
    }

    // ── Navigation ──────────────────────────────────────────────

    pub fn allowed_modules(&self) -> &'static [Module] {
        self.session
            .as_ref()
            .map(|s| s.navigator.allowed_modules())
            .unwrap_or(&[])
    }

    pub fn current_module(&self) -> Option<Module> {
        self.session.as_ref().map(|s| s.navigator.current())
    }

    pub fn navigate(&mut self, module: Module) -> DomainResult<Navigation> {
        self.with_navigator(|nav, audit, at| nav.navigate(module, audit, at))
    }

    pub fn deep_link(&mut self, raw: &str) -> DomainResult<Navigation> {
        self.with_navigator(|nav, audit, at| nav.deep_link(raw, audit, at))
    }

    pub fn restore_module(&mut self, raw: &str) -> DomainResult<Navigation> {
        self.with_navigator(|nav, audit, at| nav.restore(raw, audit, at))
    }

    /// Preview the dashboard as another role. The user record keeps its role.
    pub fn switch_role(&mut self, role: Role) -> DomainResult<Navigation> {
        self.with_navigator(|nav, audit, at| nav.switch_role(role, audit, at))
    }

    fn with_navigator<F>(&mut self, f: F) -> DomainResult<Navigation>
    where
        F: FnOnce(&mut Navigator, &mut SecurityLogStore, chrono::DateTime<chrono::Utc>) -> Navigation,
    {
        let at = self.clock.now();
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| DomainError::Unauthorized("Not signed in".into()))?;
        Ok(f(&mut session.navigator, &mut self.stores.security_logs, at))
    }

    // ── Filters ─────────────────────────────────────────────────

    pub fn apply_filter(&self, filter: &ModuleFilter) -> FilteredRecords {
        let s = &self.stores;
        match filter {
            ModuleFilter::Bookings(f) => FilteredRecords::Bookings(s.bookings.filter(|r| f.matches(r))),
            ModuleFilter::Tasks(f) => FilteredRecords::Tasks(s.tasks.filter(|r| f.matches(r))),
            ModuleFilter::Messages(f) => FilteredRecords::Messages(s.messages.filter(|r| f.matches(r))),
            ModuleFilter::Inventory(f) => FilteredRecords::Inventory(s.inventory.filter(|r| f.matches(r))),
            ModuleFilter::SecurityLogs(f) => {
                FilteredRecords::SecurityLogs(s.security_logs.filter(|r| f.matches(r)))
            }
            ModuleFilter::AccessGrants(f) => {
                FilteredRecords::AccessGrants(s.access_grants.filter(|r| f.matches(r)))
            }
            ModuleFilter::Charges(f) => FilteredRecords::Charges(s.charges.filter(|r| f.matches(r))),
        }
    }

    // ── Shifts ──────────────────────────────────────────────────

    pub fn schedule_shift(&mut self, user_id: Uuid, date: NaiveDate, shift_type: ShiftType) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).schedule(&mut self.stores.shifts, &self.stores.users, user_id, date, shift_type)
    }

    pub fn clock_in(&mut self, shift_id: Uuid) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).clock_in(&mut self.stores.shifts, &mut self.stores.users, shift_id)
    }

    pub fn clock_out(&mut self, shift_id: Uuid) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).clock_out(&mut self.stores.shifts, &mut self.stores.users, shift_id)
    }

    pub fn start_break(&mut self, shift_id: Uuid) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).start_break(&mut self.stores.shifts, shift_id)
    }

    pub fn end_break(&mut self, shift_id: Uuid) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).end_break(&mut self.stores.shifts, shift_id)
    }

    pub fn mark_shift_missed(&mut self, shift_id: Uuid) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).mark_missed(&mut self.stores.shifts, &mut self.stores.users, shift_id)
    }

    pub fn cancel_shift(&mut self, shift_id: Uuid) -> DomainResult<ShiftSchedule> {
        ShiftService::new(&self.time).cancel(&mut self.stores.shifts, shift_id)
    }

    // ── Money ───────────────────────────────────────────────────

    pub fn post_charge(&mut self, charge: Charge) -> DomainResult<Charge> {
        self.currency.rates().get(&charge.amount.currency)?;
        self.stores.charges.post(charge)
    }

    pub fn revenue_summary(&self) -> DomainResult<RevenueSummary> {
        RevenueService::new(&self.currency).summary(self.stores.charges.iter())
    }

    pub fn update_hotel_settings(&mut self, settings: HotelSettings) -> DomainResult<HotelSettings> {
        let actor = self.actor()?;
        let updated = self.currency.update_settings(&actor, settings)?.clone();
        self.audit_config_change(&actor, "Currency settings changed");
        Ok(updated)
    }

    // ── Branding ────────────────────────────────────────────────

    pub fn update_branding(&mut self, config: BrandingConfig) -> AppResult<&BrandingConfig> {
        let actor = self.actor()?;
        self.branding.update(self.storage.as_mut(), &actor, config)?;
        self.branding_changed(&actor, "Branding updated");
        Ok(self.branding.config())
    }

    pub fn export_branding(&self) -> AppResult<String> {
        self.branding.export()
    }

    pub fn import_branding(&mut self, document: &str) -> AppResult<&BrandingConfig> {
        let actor = self.actor()?;
        self.branding.import(self.storage.as_mut(), &actor, document)?;
        self.branding_changed(&actor, "Branding imported");
        Ok(self.branding.config())
    }

    fn branding_changed(&mut self, actor: &User, detail: &str) {
        self.time = TimeFormatter::from_branding(self.clock.clone(), self.branding.config());
        self.audit_config_change(actor, detail);
    }

    fn audit_config_change(&mut self, actor: &User, detail: &str) {
        let entry = SecurityLog::new(
            Some(actor.id),
            SecurityEventKind::ConfigChange,
            Severity::Info,
            format!("{}: {}", actor.username, detail),
            self.clock.now(),
        );
        if let Err(e) = self.stores.security_logs.record(entry) {
            warn!("Config change not recorded: {}", e);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
