use crate::counter::CounterTarget;

/// One product capability shown as a card and in the detail popup.
#[derive(Debug, PartialEq)]
pub struct Feature {
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub target: CounterTarget,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        image: "/images/blazing-fast-performance.png",
        alt: "Speedometer showing fast performance",
        title: "Blazing Fast Performance",
        description: "Optimized for speed, ensuring your applications run smoothly and efficiently.",
        long_description: "Our platform is engineered for unparalleled speed and responsiveness. Leveraging cutting-edge technologies and optimized algorithms, we ensure that your applications load instantly and perform seamlessly, even under heavy loads. Experience a fluid user interface and rapid data processing that keeps you ahead.",
    },
    Feature {
        image: "/images/real-time-collaboration.png",
        alt: "Laptop with puzzle pieces and app icons representing collaboration",
        title: "Real-time Collaboration",
        description: "Work together seamlessly with live updates and shared workspaces.",
        long_description: "Foster creativity and productivity with our real-time collaboration tools. Teams can work on projects simultaneously, see live updates, and communicate instantly within shared workspaces. This feature eliminates delays and ensures everyone is always on the same page, no matter where they are.",
    },
    Feature {
        image: "/images/robust-security.png",
        alt: "Hand holding a glowing shield icon representing data security",
        title: "Robust Security",
        description: "Your data is protected with industry-leading encryption and security protocols.",
        long_description: "Security is our top priority. We employ multi-layered security measures, including end-to-end encryption, regular security audits, and compliance with global data protection regulations. Rest assured that your sensitive data is safeguarded against unauthorized access and cyber threats.",
    },
    Feature {
        image: "/images/intuitive-interface.png",
        alt: "Browser window with user interface wireframe and checkmarks",
        title: "Intuitive Interface",
        description: "Designed for ease of use, making complex tasks simple and accessible.",
        long_description: "Our user interface is crafted with simplicity and efficiency in mind. Navigate through features effortlessly with a clean, uncluttered design and intuitive controls. Whether you're a beginner or an expert, you'll find our platform easy to learn and powerful to use.",
    },
    Feature {
        image: "/images/scalable-infrastructure.png",
        alt: "Tablet displaying data graphs surrounded by abstract data and technology icons",
        title: "Scalable Infrastructure",
        description: "Grow your operations without worrying about performance limitations.",
        long_description: "Our infrastructure is built to scale with your needs. From small startups to large enterprises, our flexible architecture can handle increasing demands without compromising performance. Expand your operations confidently, knowing our platform will grow with you.",
    },
    Feature {
        image: "/images/24-7-customer-support.png",
        alt: "Person with headset coming out of a phone with '24/7' and 'ONLINE SUPPORT' text",
        title: "24/7 Customer Support",
        description: "Dedicated support team available around the clock to assist you.",
        long_description: "We are committed to providing exceptional customer service. Our dedicated support team is available 24/7 to assist you with any questions, issues, or technical challenges you may encounter. Get timely and effective solutions whenever you need them.",
    },
];

pub static STATS: [Stat; 3] = [
    Stat {
        target: CounterTarget::new(10000.0).with_suffix("+"),
        label: "Happy Users",
    },
    Stat {
        target: CounterTarget::new(500.0).with_suffix("+"),
        label: "Projects Launched",
    },
    Stat {
        target: CounterTarget::new(99.9).with_decimals(1).with_suffix("%"),
        label: "Uptime Reliability",
    },
];

pub static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        id: "item-1",
        question: "What is Acme Inc.?",
        answer: "Acme Inc. is an innovative platform designed to streamline your workflow, enhance collaboration, and boost productivity for individuals and teams.",
    },
    FaqEntry {
        id: "item-2",
        question: "How does it work?",
        answer: "Our platform provides a suite of intuitive tools and features accessible through a user-friendly dashboard. Simply sign up, create your projects, and invite your team members to get started.",
    },
    FaqEntry {
        id: "item-3",
        question: "Is my data secure?",
        answer: "Yes, we prioritize your data security. Our platform uses industry-leading encryption and robust security protocols to ensure your information is always protected.",
    },
    FaqEntry {
        id: "item-4",
        question: "Do you offer customer support?",
        answer: "We offer comprehensive customer support through various channels, including email, live chat, and a dedicated knowledge base, to assist you with any questions or issues.",
    },
];

/// Whether `feature` is one of the records in [`FEATURES`] (by identity, not by value).
pub fn is_known_feature(feature: &Feature) -> bool {
    FEATURES.iter().any(|known| std::ptr::eq(known, feature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_titles_and_images_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        let images: HashSet<_> = FEATURES.iter().map(|f| f.image).collect();
        assert_eq!(titles.len(), FEATURES.len());
        assert_eq!(images.len(), FEATURES.len());
    }

    #[test]
    fn every_feature_has_copy_and_alt_text() {
        for feature in FEATURES.iter() {
            assert!(!feature.alt.is_empty(), "{} has no alt text", feature.title);
            assert!(!feature.description.is_empty());
            assert!(feature.long_description.len() > feature.description.len());
        }
    }

    #[test]
    fn stats_match_published_numbers() {
        let finals: Vec<String> = STATS.iter().map(|s| s.target.final_display()).collect();
        assert_eq!(finals, vec!["10000+", "500+", "99.9%"]);
    }

    #[test]
    fn faq_ids_are_unique() {
        let ids: HashSet<_> = FAQ.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), FAQ.len());
    }

    #[test]
    fn known_feature_checks_identity() {
        assert!(FEATURES.iter().all(is_known_feature));

        let copy = Feature { ..FEATURES[0] };
        assert!(!is_known_feature(&copy));
    }
}
