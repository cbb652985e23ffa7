//! In-memory repository store.
//!
//! `MemStore` holds every entity collection for the lifetime of the
//! process. It is constructed once at startup (seeded from fixtures),
//! owned by the process entry point, and handed to the API layer as an
//! explicit dependency rather than reached through a global.

use campus_models::{
    Achievement, ContactMessage, Event, FacultyMember, GalleryCategory, GalleryItem,
    NewAchievement, NewContactMessage, NewEvent, NewFacultyMember, NewGalleryItem, NewStudent,
    Student,
};
use uuid::Uuid;

use crate::collection::Collection;
use crate::seed;

/// Read/write contract the API layer consumes.
///
/// Lookups by unknown id return `None`, never an error. Creates are
/// total over well-formed input: request validation happens upstream,
/// and the store performs no uniqueness or referential checks of its
/// own (`registration_number` uniqueness and `mentor_id` integrity are
/// conventions, deliberately unenforced).
pub trait Storage {
    // Faculty
    fn faculty(&self) -> Vec<FacultyMember>;
    fn faculty_by_id(&self, id: Uuid) -> Option<FacultyMember>;
    fn create_faculty(&mut self, new: NewFacultyMember) -> FacultyMember;

    // Students
    fn students(&self) -> Vec<Student>;
    fn student_by_id(&self, id: Uuid) -> Option<Student>;
    fn create_student(&mut self, new: NewStudent) -> Student;
    fn search_students(&self, query: &str) -> Vec<Student>;

    // Events
    fn events(&self) -> Vec<Event>;
    fn event_by_id(&self, id: Uuid) -> Option<Event>;
    fn create_event(&mut self, new: NewEvent) -> Event;
    fn upcoming_events(&self) -> Vec<Event>;
    fn past_events(&self) -> Vec<Event>;

    // Achievements
    fn achievements(&self) -> Vec<Achievement>;
    fn achievement_by_id(&self, id: Uuid) -> Option<Achievement>;
    fn create_achievement(&mut self, new: NewAchievement) -> Achievement;

    // Contact messages
    fn contact_messages(&self) -> Vec<ContactMessage>;
    fn create_contact_message(&mut self, new: NewContactMessage) -> ContactMessage;

    // Gallery
    fn gallery_items(&self) -> Vec<GalleryItem>;
    fn gallery_items_by_category(&self, category: GalleryCategory) -> Vec<GalleryItem>;
    fn create_gallery_item(&mut self, new: NewGalleryItem) -> GalleryItem;
}

/// Volatile store over six entity collections. Reset on every process
/// restart and reseeded from the same fixture data.
#[derive(Debug, Default)]
pub struct MemStore {
    faculty: Collection<FacultyMember>,
    students: Collection<Student>,
    events: Collection<Event>,
    achievements: Collection<Achievement>,
    contact_messages: Collection<ContactMessage>,
    gallery_items: Collection<GalleryItem>,
}

impl MemStore {
    /// An empty store with no seed data. Used by tests that need full
    /// control over contents.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store populated with the site fixture data.
    pub fn with_fixtures() -> Self {
        let mut store = Self::new();
        seed::populate(&mut store);
        tracing::info!(
            faculty = store.faculty.len(),
            students = store.students.len(),
            events = store.events.len(),
            achievements = store.achievements.len(),
            gallery_items = store.gallery_items.len(),
            "store seeded"
        );
        store
    }
}

impl Storage for MemStore {
    fn faculty(&self) -> Vec<FacultyMember> {
        self.faculty.all()
    }

    fn faculty_by_id(&self, id: Uuid) -> Option<FacultyMember> {
        self.faculty.get(id)
    }

    fn create_faculty(&mut self, new: NewFacultyMember) -> FacultyMember {
        self.faculty.insert_with(|id, created_at| FacultyMember {
            id,
            name: new.name,
            title: new.title,
            email: new.email,
            phone: new.phone,
            department: new
                .department
                .unwrap_or_else(|| NewFacultyMember::DEFAULT_DEPARTMENT.to_string()),
            specialization: new.specialization,
            bio: new.bio,
            image_url: new.image_url,
            created_at,
        })
    }

    fn students(&self) -> Vec<Student> {
        self.students.all()
    }

    fn student_by_id(&self, id: Uuid) -> Option<Student> {
        self.students.get(id)
    }

    fn create_student(&mut self, new: NewStudent) -> Student {
        // mentor_id is stored as given; dangling references are legal.
        self.students.insert_with(|id, created_at| Student {
            id,
            name: new.name,
            registration_number: new.registration_number,
            mentor_id: new.mentor_id,
            research_interest: new.research_interest,
            year: new.year,
            email: new.email,
            created_at,
        })
    }

    fn search_students(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        self.students
            .all()
            .into_iter()
            .filter(|student| {
                student.name.to_lowercase().contains(&needle)
                    || student.registration_number.to_lowercase().contains(&needle)
                    || student.research_interest.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn events(&self) -> Vec<Event> {
        let mut events = self.events.all();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events
    }

    fn event_by_id(&self, id: Uuid) -> Option<Event> {
        self.events.get(id)
    }

    fn create_event(&mut self, new: NewEvent) -> Event {
        self.events.insert_with(|id, created_at| Event {
            id,
            title: new.title,
            description: new.description,
            kind: new.kind,
            date: new.date,
            end_date: new.end_date,
            location: new.location,
            image_url: new.image_url,
            is_upcoming: new.is_upcoming,
            max_participants: new.max_participants,
            current_participants: new.current_participants,
            created_at,
        })
    }

    fn upcoming_events(&self) -> Vec<Event> {
        // Partition is by the stored flag only; an event whose date has
        // passed but whose flag is still set stays in this listing.
        let mut events: Vec<Event> = self
            .events
            .all()
            .into_iter()
            .filter(|event| event.is_upcoming)
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    fn past_events(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .all()
            .into_iter()
            .filter(|event| !event.is_upcoming)
            .collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events
    }

    fn achievements(&self) -> Vec<Achievement> {
        let mut achievements = self.achievements.all();
        achievements.sort_by(|a, b| b.date.cmp(&a.date));
        achievements
    }

    fn achievement_by_id(&self, id: Uuid) -> Option<Achievement> {
        self.achievements.get(id)
    }

    fn create_achievement(&mut self, new: NewAchievement) -> Achievement {
        self.achievements.insert_with(|id, created_at| Achievement {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
            achiever_name: new.achiever_name,
            date: new.date,
            image_url: new.image_url,
            created_at,
        })
    }

    fn contact_messages(&self) -> Vec<ContactMessage> {
        let mut messages = self.contact_messages.all();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    fn create_contact_message(&mut self, new: NewContactMessage) -> ContactMessage {
        self.contact_messages
            .insert_with(|id, created_at| ContactMessage {
                id,
                name: new.name,
                email: new.email,
                subject: new.subject,
                message: new.message,
                is_read: false,
                created_at,
            })
    }

    fn gallery_items(&self) -> Vec<GalleryItem> {
        let mut items = self.gallery_items.all();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    fn gallery_items_by_category(&self, category: GalleryCategory) -> Vec<GalleryItem> {
        let mut items: Vec<GalleryItem> = self
            .gallery_items
            .all()
            .into_iter()
            .filter(|item| item.category == category)
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    fn create_gallery_item(&mut self, new: NewGalleryItem) -> GalleryItem {
        self.gallery_items.insert_with(|id, created_at| GalleryItem {
            id,
            title: new.title,
            description: new.description,
            image_url: new.image_url,
            category: new.category,
            created_at,
        })
    }
}
