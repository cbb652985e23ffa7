//! Startup fixture data.
//!
//! The store is volatile, so every process start repopulates it from the
//! same dataset: the department faculty roster, the student body with
//! mentors cycling through the first four faculty members, a handful of
//! events and achievements dated relative to "now", and the gallery.

use campus_models::{
    AchievementCategory, GalleryCategory, NewAchievement, NewEvent, NewFacultyMember,
    NewGalleryItem, NewStudent,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::mem::{MemStore, Storage};

pub fn populate(store: &mut MemStore) {
    let faculty_ids = seed_faculty(store);
    seed_students(store, &faculty_ids);
    seed_events(store);
    seed_achievements(store);
    seed_gallery(store);
}

fn seed_faculty(store: &mut MemStore) -> Vec<Uuid> {
    let roster = [
        (
            "Dr. Alex Morgan",
            "Head of Department",
            "alex.morgan@college.edu",
            "+1 (555) 123-4567",
            "Network Security & Threat Analysis",
            "PhD in Cybersecurity with 15+ years experience in network security and ethical hacking",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
        ),
        (
            "Prof. Sarah Chen",
            "Associate Professor",
            "sarah.chen@college.edu",
            "+1 (555) 123-4568",
            "Digital Forensics & Incident Response",
            "Specialist in Digital Forensics and Incident Response, published researcher with industry experience",
            "https://images.unsplash.com/photo-1494790108755-2616b332446c?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
        ),
        (
            "Dr. Marcus Williams",
            "Senior Lecturer",
            "marcus.williams@college.edu",
            "+1 (555) 123-4569",
            "Ethical Hacking & Penetration Testing",
            "Expert in Cryptography and Blockchain Security, industry consultant and researcher",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
        ),
        (
            "Dr. Emma Rodriguez",
            "Assistant Professor",
            "emma.rodriguez@college.edu",
            "+1 (555) 123-4570",
            "Cryptography & Blockchain Security",
            "Penetration Testing and Vulnerability Assessment specialist with extensive field experience",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
        ),
        (
            "Prof. David Park",
            "Lecturer",
            "david.park@college.edu",
            "+1 (555) 123-4571",
            "Cloud Security & Infrastructure",
            "Network Security and Firewall Management expert, former industry professional",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
        ),
        (
            "Ms. Lisa Anderson",
            "Lab Instructor",
            "lisa.anderson@college.edu",
            "+1 (555) 123-4572",
            "Practical Security Training",
            "Hands-on security tools and practical cybersecurity training specialist",
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
        ),
    ];

    roster
        .into_iter()
        .map(|(name, title, email, phone, specialization, bio, image_url)| {
            store
                .create_faculty(NewFacultyMember {
                    name: name.to_string(),
                    title: title.to_string(),
                    email: email.to_string(),
                    phone: Some(phone.to_string()),
                    department: None,
                    specialization: specialization.to_string(),
                    bio: Some(bio.to_string()),
                    image_url: Some(image_url.to_string()),
                })
                .id
        })
        .collect()
}

fn seed_students(store: &mut MemStore, faculty_ids: &[Uuid]) {
    let body = [
        ("Alice Johnson", "CS2021001", "Network Security & Intrusion Detection", 4, "alice.johnson@student.edu"),
        ("Bob Smith", "CS2021002", "Digital Forensics & Incident Response", 4, "bob.smith@student.edu"),
        ("Carol Davis", "CS2021003", "Ethical Hacking & Penetration Testing", 4, "carol.davis@student.edu"),
        ("David Wilson", "CS2021004", "Cryptography & Blockchain Security", 4, "david.wilson@student.edu"),
        ("Emma Thompson", "CS2021005", "Malware Analysis & Reverse Engineering", 4, "emma.thompson@student.edu"),
        ("Frank Garcia", "CS2021006", "Cyber Threat Intelligence", 4, "frank.garcia@student.edu"),
        ("Grace Lee", "CS2021007", "IoT Security & Privacy", 4, "grace.lee@student.edu"),
        ("Henry Brown", "CS2021008", "Web Application Security", 4, "henry.brown@student.edu"),
        ("Isabel Martinez", "CS2021009", "Cloud Security Architecture", 4, "isabel.martinez@student.edu"),
        ("Jack Taylor", "CS2021010", "Mobile Security & App Analysis", 4, "jack.taylor@student.edu"),
        ("Kate Anderson", "CS2021011", "AI-Driven Threat Detection", 4, "kate.anderson@student.edu"),
        ("Liam Clark", "CS2021012", "Social Engineering & Human Factors", 4, "liam.clark@student.edu"),
        ("Maya Rodriguez", "CS2021013", "Zero-Day Exploit Research", 4, "maya.rodriguez@student.edu"),
        ("Noah White", "CS2021014", "Quantum Cryptography", 4, "noah.white@student.edu"),
        ("Olivia Johnson", "CS2022001", "Blockchain Security Protocols", 3, "olivia.johnson@student.edu"),
        ("Peter Kim", "CS2022002", "Industrial Control Systems Security", 3, "peter.kim@student.edu"),
        ("Quinn Davis", "CS2022003", "Automotive Cybersecurity", 3, "quinn.davis@student.edu"),
        ("Rachel Green", "CS2022004", "Healthcare Security Systems", 3, "rachel.green@student.edu"),
        ("Sam Miller", "CS2022005", "Financial Technology Security", 3, "sam.miller@student.edu"),
        ("Tina Wilson", "CS2022006", "Privacy-Preserving Technologies", 3, "tina.wilson@student.edu"),
        ("Uma Patel", "CS2022007", "Bug Bounty & Vulnerability Research", 3, "uma.patel@student.edu"),
        ("Victor Chen", "CS2022008", "Secure Software Development", 3, "victor.chen@student.edu"),
        ("Wendy Lopez", "CS2022009", "Cyber Physical Systems Security", 3, "wendy.lopez@student.edu"),
        ("Xavier Garcia", "CS2022010", "Machine Learning Security", 3, "xavier.garcia@student.edu"),
        ("Yuki Tanaka", "CS2023001", "Distributed Systems Security", 2, "yuki.tanaka@student.edu"),
        ("Zoe Williams", "CS2023002", "Security Awareness & Training", 2, "zoe.williams@student.edu"),
        ("Alex Kim", "CS2023003", "Incident Response Automation", 2, "alex.kim@student.edu"),
        ("Blake Foster", "CS2023004", "Threat Hunting & Analytics", 2, "blake.foster@student.edu"),
    ];

    // Mentors cycle through the first four faculty members.
    for (i, (name, registration, interest, year, email)) in body.into_iter().enumerate() {
        store.create_student(NewStudent {
            name: name.to_string(),
            registration_number: registration.to_string(),
            mentor_id: Some(faculty_ids[i % 4]),
            research_interest: interest.to_string(),
            year,
            email: Some(email.to_string()),
        });
    }
}

fn seed_events(store: &mut MemStore) {
    let now = Utc::now();

    store.create_event(NewEvent {
        title: "Advanced Penetration Testing Workshop".to_string(),
        description: "Hands-on workshop covering latest penetration testing tools and techniques including OWASP Top 10 vulnerabilities.".to_string(),
        kind: "Workshop".to_string(),
        date: now + Duration::days(30),
        end_date: Some(now + Duration::days(30) + Duration::hours(4)),
        location: Some("Cybersecurity Lab A".to_string()),
        image_url: Some("https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string()),
        is_upcoming: true,
        max_participants: Some(25),
        current_participants: 18,
    });

    store.create_event(NewEvent {
        title: "Capture The Flag Competition".to_string(),
        description: "Inter-college CTF competition with exciting challenges in web security, cryptography, and reverse engineering.".to_string(),
        kind: "Competition".to_string(),
        date: now + Duration::days(45),
        end_date: Some(now + Duration::days(47)),
        location: Some("Main Auditorium".to_string()),
        image_url: Some("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string()),
        is_upcoming: true,
        max_participants: Some(100),
        current_participants: 75,
    });

    store.create_event(NewEvent {
        title: "Industry Expert Seminar".to_string(),
        description: "Leading cybersecurity professionals share industry insights and career guidance for aspiring security experts.".to_string(),
        kind: "Seminar".to_string(),
        date: now + Duration::days(60),
        end_date: Some(now + Duration::days(60) + Duration::hours(2)),
        location: Some("Conference Hall".to_string()),
        image_url: Some("https://images.unsplash.com/photo-1515378791036-0648a814c963?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string()),
        is_upcoming: true,
        max_participants: Some(200),
        current_participants: 45,
    });

    store.create_event(NewEvent {
        title: "Ethical Hacking Certification".to_string(),
        description: "Students received industry-recognized ethical hacking certifications from leading cybersecurity organizations.".to_string(),
        kind: "Certification".to_string(),
        date: now - Duration::days(30),
        end_date: None,
        location: Some("Department Auditorium".to_string()),
        image_url: Some("https://images.unsplash.com/photo-1523240795612-9a054b0db644?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string()),
        is_upcoming: false,
        max_participants: None,
        current_participants: 0,
    });

    store.create_event(NewEvent {
        title: "24-Hour Security Hackathon".to_string(),
        description: "Students developed innovative security solutions in intensive 24-hour hackathon focused on real-world challenges.".to_string(),
        kind: "Hackathon".to_string(),
        date: now - Duration::days(60),
        end_date: Some(now - Duration::days(59)),
        location: Some("Innovation Center".to_string()),
        image_url: Some("https://images.unsplash.com/photo-1519389950473-47ba0277781c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string()),
        is_upcoming: false,
        max_participants: None,
        current_participants: 0,
    });
}

fn seed_achievements(store: &mut MemStore) {
    let now = Utc::now();

    store.create_achievement(NewAchievement {
        title: "National Cybersecurity Excellence Award".to_string(),
        description: "Department recognized as the leading cybersecurity education program in the region for outstanding curriculum and research.".to_string(),
        category: AchievementCategory::Department,
        achiever_name: None,
        date: now - Duration::days(90),
        image_url: Some("https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string()),
    });

    store.create_achievement(NewAchievement {
        title: "CTF Competition Champion".to_string(),
        description: "Emma Rodriguez secured first place in the National Capture The Flag competition, demonstrating exceptional skills in cybersecurity.".to_string(),
        category: AchievementCategory::Student,
        achiever_name: Some("Emma Rodriguez".to_string()),
        date: now - Duration::days(45),
        image_url: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200".to_string()),
    });

    store.create_achievement(NewAchievement {
        title: "Research Publication Excellence".to_string(),
        description: "Dr. Alex Morgan published groundbreaking research on AI-driven threat detection in top-tier cybersecurity journal.".to_string(),
        category: AchievementCategory::Faculty,
        achiever_name: Some("Dr. Alex Morgan".to_string()),
        date: now - Duration::days(120),
        image_url: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200".to_string()),
    });

    store.create_achievement(NewAchievement {
        title: "Bug Bounty Achievement".to_string(),
        description: "Lisa Wong earned over $50,000 from ethical hacking and vulnerability research, contributing to global cybersecurity.".to_string(),
        category: AchievementCategory::Student,
        achiever_name: Some("Lisa Wong".to_string()),
        date: now - Duration::days(75),
        image_url: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200".to_string()),
    });
}

fn seed_gallery(store: &mut MemStore) {
    let items = [
        (
            "Advanced Cybersecurity Lab",
            "State-of-the-art cybersecurity lab with multiple workstations and security equipment",
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800",
            GalleryCategory::Labs,
        ),
        (
            "Network Security Infrastructure",
            "Network infrastructure with servers and networking equipment for cybersecurity training",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800",
            GalleryCategory::Labs,
        ),
        (
            "Student Collaboration",
            "Students collaborating on cybersecurity project with laptops and documents",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800",
            GalleryCategory::Students,
        ),
        (
            "Penetration Testing Workshop",
            "Hands-on cybersecurity workshop with students learning security techniques",
            "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800",
            GalleryCategory::Events,
        ),
        (
            "Research Excellence",
            "Award ceremony recognizing cybersecurity excellence and achievements",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800",
            GalleryCategory::Achievements,
        ),
    ];

    for (title, description, image_url, category) in items {
        store.create_gallery_item(NewGalleryItem {
            title: title.to_string(),
            description: Some(description.to_string()),
            image_url: image_url.to_string(),
            category,
        });
    }
}
