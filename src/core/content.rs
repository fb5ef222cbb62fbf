//! Static site content: journal posts, services, gallery, projects, testimonials

use serde::Serialize;

/// Journal article; `content` is Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub preview: &'static str,
    pub read_time: &'static str,
    pub author: &'static str,
    pub tags: &'static [&'static str],
    pub content: &'static str,
}

impl Post {
    pub fn href(&self) -> String {
        format!("/post/{}", self.id)
    }
}

const AUTHOR: &str = "John Frontdev";

pub const POSTS: [Post; 4] = [
    Post {
        id: "designing-digital-authority",
        title: "Designing Digital Authority",
        date: "December 2024",
        preview: "How premium brands establish presence through thoughtful design systems and strategic visual hierarchy.",
        read_time: "5 min read",
        author: AUTHOR,
        tags: &["Design", "Branding", "Strategy"],
        content: include_str!("../../content/posts/designing-digital-authority.md"),
    },
    Post {
        id: "web-2030-vision",
        title: "My Vision for Web 2030",
        date: "November 2024",
        preview: "The future of digital experiences lies in the intersection of aesthetic beauty and functional excellence.",
        read_time: "8 min read",
        author: AUTHOR,
        tags: &["Future", "Technology", "Vision"],
        content: include_str!("../../content/posts/web-2030-vision.md"),
    },
    Post {
        id: "minimal-complexity",
        title: "The Art of Minimal Complexity",
        date: "October 2024",
        preview: "Exploring how sophisticated simplicity creates more powerful user experiences than feature-heavy interfaces.",
        read_time: "6 min read",
        author: AUTHOR,
        tags: &["Minimalism", "UX", "Philosophy"],
        content: include_str!("../../content/posts/minimal-complexity.md"),
    },
    Post {
        id: "timeless-brand-experiences",
        title: "Building Timeless Brand Experiences",
        date: "September 2024",
        preview: "Why investing in premium design pays dividends in brand perception and customer loyalty.",
        read_time: "4 min read",
        author: AUTHOR,
        tags: &["Branding", "Strategy", "ROI"],
        content: include_str!("../../content/posts/timeless-brand-experiences.md"),
    },
];

pub fn find_post(id: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub timeline: &'static str,
    pub investment: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        id: "premium-websites",
        title: "Premium Websites",
        description: "Custom digital experiences built to establish authority and drive conversions through strategic design.",
        icon: "monitor",
        features: &[
            "Strategic brand positioning",
            "Custom responsive design system",
            "Performance optimization (90+ PageSpeed)",
            "SEO foundation & technical setup",
            "Analytics & conversion tracking",
        ],
        timeline: "4-6 weeks",
        investment: "Starting at $599",
    },
    Service {
        id: "interactive-portfolios",
        title: "Interactive Portfolios",
        description: "Immersive portfolio experiences that showcase your work through compelling visual storytelling.",
        icon: "smartphone",
        features: &[
            "Custom scroll animations",
            "Case study templates",
            "Image galleries & lightboxes",
            "Client testimonial integration",
            "Contact form & booking system",
        ],
        timeline: "3-4 weeks",
        investment: "Starting at $299",
    },
    Service {
        id: "seo-architecture",
        title: "SEO & Growth Architecture",
        description: "Complete content systems designed to build authority and drive sustainable organic growth.",
        icon: "file-text",
        features: &[
            "SEO-optimized site architecture",
            "Content management system",
            "Editorial design templates",
            "Social sharing integration",
            "Performance tracking & analytics",
        ],
        timeline: "2-3 weeks",
        investment: "Starting at $1,199",
    },
];

/// Services accordion: at most one card expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceAccordion {
    expanded: Option<&'static str>,
}

impl ServiceAccordion {
    pub fn toggle(&mut self, id: &'static str) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub src: &'static str,
    pub category: &'static str,
}

pub const GALLERY_FILTERS: [&str; 5] = ["All", "Paris", "Dubai", "Studio", "Outdoor"];

pub const GALLERY_IMAGES: [GalleryImage; 6] = [
    GalleryImage { src: "/img/2.jpeg", category: "Paris" },
    GalleryImage { src: "/img/3.jpg", category: "Studio" },
    GalleryImage { src: "/img/4.jpg", category: "Dubai" },
    GalleryImage { src: "/img/5.jpg", category: "Outdoor" },
    GalleryImage { src: "/img/1.jpeg", category: "Studio" },
    GalleryImage { src: "/img/2.jpeg", category: "Paris" },
];

/// Images shown under `filter`; "All" shows everything
pub fn filter_gallery(filter: &str) -> Vec<GalleryImage> {
    GALLERY_IMAGES
        .iter()
        .filter(|image| filter == "All" || image.category == filter)
        .copied()
        .collect()
}

/// Project card in the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub image: &'static str,
}

pub const SITES: [SiteItem; 3] = [
    SiteItem {
        id: "1",
        title: "shadcn/ui: Building a Modern Component Library",
        description: "Explore how shadcn/ui revolutionized React component libraries with unique distribution and customization.",
        href: "https://ui.shadcn.com",
        image: "https://images.unsplash.com/photo-1551250928-243dc937c49d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    },
    SiteItem {
        id: "2",
        title: "Tailwind CSS: The Utility-First Revolution",
        description: "Discover how Tailwind CSS transformed styling with utility-first classes and complete flexibility.",
        href: "https://tailwindcss.com",
        image: "https://images.unsplash.com/photo-1551250928-e4a05afaed1e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    },
    SiteItem {
        id: "3",
        title: "React: Pioneering Component-Based UI",
        description: "React enables developers to build complex UIs with reusable, maintainable code.",
        href: "https://react.dev",
        image: "https://images.unsplash.com/photo-1548324215-9133768e4094?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub text: &'static str,
    pub image: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 9] = [
    Testimonial {
        text: "John built our CRM from scratch and made it so easy for our team to use. The interface is clear and everything just works.",
        image: "https://randomuser.me/api/portraits/women/1.jpg",
        name: "Briana Patton",
        role: "Operations Manager",
    },
    Testimonial {
        text: "He delivered our React website quickly and the UX/UI is simple and intuitive. Working with him was smooth from start to finish.",
        image: "https://randomuser.me/api/portraits/men/2.jpg",
        name: "Bilal Ahmed",
        role: "IT Manager",
    },
    Testimonial {
        text: "John is very hands-on and supportive. He helped us set up our system and suggested improvements that made our work easier.",
        image: "https://randomuser.me/api/portraits/women/3.jpg",
        name: "Saman Malik",
        role: "Customer Support Lead",
    },
    Testimonial {
        text: "He integrated our tools perfectly and made our workflow faster and simpler. Everything feels smoother now.",
        image: "https://randomuser.me/api/portraits/men/4.jpg",
        name: "Omar Raza",
        role: "CEO",
    },
    Testimonial {
        text: "John doesn’t just code, he makes things work for people. Our team adapted to the new system right away and productivity improved.",
        image: "https://randomuser.me/api/portraits/women/5.jpg",
        name: "Zainab Hussain",
        role: "Project Manager",
    },
    Testimonial {
        text: "Our website and landing pages look better and work better. John really understands what users need.",
        image: "https://randomuser.me/api/portraits/women/6.jpg",
        name: "Aliza Khan",
        role: "Business Analyst",
    },
    Testimonial {
        text: "The CRM he designed is so intuitive that anyone can use it. He combines React and UX/UI in a practical way.",
        image: "https://randomuser.me/api/portraits/men/7.jpg",
        name: "Farhan Siddiqui",
        role: "Marketing Director",
    },
    Testimonial {
        text: "John delivered our project faster than expected and with high quality. He knows how to turn ideas into real solutions.",
        image: "https://randomuser.me/api/portraits/women/8.jpg",
        name: "Sana Sheikh",
        role: "Sales Manager",
    },
    Testimonial {
        text: "After John improved our platform, our conversions went up and customers enjoy using it much more.",
        image: "https://randomuser.me/api/portraits/men/9.jpg",
        name: "Hassan Ali",
        role: "E-commerce Manager",
    },
];

/// Testimonials split into three scrolling columns, with each column's loop
/// duration in seconds
pub fn testimonial_columns() -> [(&'static [Testimonial], u32); 3] {
    [
        (&TESTIMONIALS[0..3], 15),
        (&TESTIMONIALS[3..6], 19),
        (&TESTIMONIALS[6..9], 17),
    ]
}

/// Headline figures on the about section, as (value, label)
pub const ABOUT_STATS: [(&str, &str); 3] = [
    ("50+", "Projects Delivered"),
    ("5+", "Years Experience"),
    ("100%", "Client Satisfaction"),
];
