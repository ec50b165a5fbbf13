//! Recording stub collaborators for unit tests.

use std::sync::{Arc, Mutex};

use glam::Vec3;

use crate::blackboard::AgentContext;
use crate::engine::{AnimFlag, Animation, EntityEvents, Navigation, Weapon};

/// Everything the stubs saw, plus the position they report back.
#[derive(Default)]
pub struct Recorded {
    pub position: Vec3,
    pub destinations: Vec<(Vec3, f32)>,
    pub stops: u32,
    pub flags: Vec<(AnimFlag, bool)>,
    pub fires: Vec<Vec3>,
    pub stun_ends: u32,
    pub deaths: u32,
}

pub type SharedRecorded = Arc<Mutex<Recorded>>;

/// One shared record plus a second handle for assertions.
pub fn recorder() -> (SharedRecorded, SharedRecorded) {
    let rec = Arc::new(Mutex::new(Recorded::default()));
    (rec.clone(), rec)
}

pub struct StubNav(pub SharedRecorded);

impl Navigation for StubNav {
    fn position(&self) -> Vec3 {
        self.0.lock().unwrap().position
    }

    fn set_destination(&mut self, destination: Vec3, speed: f32) {
        self.0.lock().unwrap().destinations.push((destination, speed));
    }

    fn stop(&mut self) {
        self.0.lock().unwrap().stops += 1;
    }
}

pub struct StubAnimation(pub SharedRecorded);

impl Animation for StubAnimation {
    fn set_flag(&mut self, flag: AnimFlag, on: bool) {
        self.0.lock().unwrap().flags.push((flag, on));
    }
}

pub struct StubWeapon(pub SharedRecorded);

impl Weapon for StubWeapon {
    fn fire(&mut self, at: Vec3) {
        self.0.lock().unwrap().fires.push(at);
    }
}

pub struct StubEntity(pub SharedRecorded);

impl EntityEvents for StubEntity {
    fn stun_ended(&mut self) {
        self.0.lock().unwrap().stun_ends += 1;
    }

    fn died(&mut self) {
        self.0.lock().unwrap().deaths += 1;
    }
}

/// A fully wired context over one shared record, default config.
pub fn agent_context(rec: SharedRecorded) -> AgentContext {
    AgentContext::builder()
        .navigation(Box::new(StubNav(rec.clone())))
        .animation(Box::new(StubAnimation(rec.clone())))
        .weapon(Box::new(StubWeapon(rec.clone())))
        .entity(Box::new(StubEntity(rec)))
        .build()
        .expect("all collaborators are wired")
}
