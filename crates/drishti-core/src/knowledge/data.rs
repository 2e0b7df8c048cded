//! Static FAQ content for the YNM Drishti assistant.

use super::model::KnowledgeEntry;

pub(crate) const FAQ_ENTRIES: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        id: 1,
        question: "What is YNM Drishti?",
        answer: "YNM Drishti is an AI-powered road infrastructure monitoring platform. It turns ordinary dashcam and smartphone video into a live map of potholes, cracks, faded lane markings and damaged signage, so road agencies and contractors can find defects early, prioritise repairs and prove the quality of their work with geotagged evidence.",
        topic_icon: "🛣️",
    },
    KnowledgeEntry {
        id: 2,
        question: "How accurate is the pothole detection?",
        answer: "Our detection models reach over 95% accuracy on potholes and major surface cracks in field trials across Indian highways and city roads. Every detection carries a confidence score and a geotagged image, so your engineers can verify any finding in seconds.",
        topic_icon: "🎯",
    },
    KnowledgeEntry {
        id: 3,
        question: "Can I get a demo of the platform?",
        answer: "Absolutely! Book a free live demo from our Contact page or write to demo@ynmdrishti.com. We will walk you through a real survey of roads in your region and show the defect map, reports and repair prioritisation end to end.",
        topic_icon: "🚀",
    },
    KnowledgeEntry {
        id: 4,
        question: "How fast is the processing?",
        answer: "Footage uploaded from a survey vehicle is processed in near real time. A 50 km stretch is typically analysed and mapped within 30 minutes, and critical defects trigger instant alerts to your maintenance team.",
        topic_icon: "⚡",
    },
    KnowledgeEntry {
        id: 5,
        question: "How does the workflow work?",
        answer: "It takes four steps: capture road video with a dashcam or smartphone while driving, upload it to the Drishti cloud, let our AI detect and classify every defect with GPS coordinates, then review prioritised repair lists and reports on the dashboard.",
        topic_icon: "🔄",
    },
    KnowledgeEntry {
        id: 6,
        question: "Do you offer an API for integration?",
        answer: "Yes. The Drishti REST API lets you push survey footage, pull detections as GeoJSON and sync work orders with your existing asset management or GIS systems. Keys and documentation come with every enterprise plan.",
        topic_icon: "🔌",
    },
    KnowledgeEntry {
        id: 7,
        question: "Which industries use YNM Drishti?",
        answer: "We work with national and state highway authorities, municipal corporations, road construction contractors, toll operators, smart city programmes and insurers that need reliable road condition data.",
        topic_icon: "🏗️",
    },
    KnowledgeEntry {
        id: 8,
        question: "What ROI and benefits can we expect?",
        answer: "Customers typically cut manual inspection costs by up to 70%, fix defects before they grow into expensive failures and reduce accident risk on their network. Faster, evidence-based maintenance decisions usually pay back the subscription within the first year.",
        topic_icon: "📈",
    },
    KnowledgeEntry {
        id: 9,
        question: "What technology powers YNM Drishti?",
        answer: "Drishti combines deep learning computer vision models trained on millions of annotated road images, GPS and IMU sensor fusion for precise geotagging, and a cloud pipeline that scales to thousands of kilometres of footage per day.",
        topic_icon: "🧠",
    },
    KnowledgeEntry {
        id: 10,
        question: "What support and training do you provide?",
        answer: "Every customer gets onboarding and hands-on training for field and office teams, a dedicated account manager, and email and phone support during business hours, with round-the-clock priority support on enterprise plans.",
        topic_icon: "🤝",
    },
    KnowledgeEntry {
        id: 11,
        question: "How can I contact YNM Drishti?",
        answer: "You can reach us at info@ynmdrishti.com, call +91 98765 43210, or use the contact form on our website. Our team usually responds within one business day.",
        topic_icon: "📞",
    },
    KnowledgeEntry {
        id: 12,
        question: "How much does YNM Drishti cost?",
        answer: "Pricing depends on the length of road network you monitor and the modules you need. We offer flexible per-kilometre and annual subscription plans; our sales team will prepare a tailored quote for you.",
        topic_icon: "💰",
    },
];

pub(crate) const COMPANY_FACTS: &str = "\
COMPANY: YNM Drishti (a YNM Safety venture)
MISSION: Safer roads through continuous, AI-driven infrastructure monitoring.
PRODUCT: Cloud platform that analyses road video from dashcams and smartphones.
DETECTS: potholes, surface cracks, rutting, faded lane markings, damaged signage, missing road studs.
ACCURACY: over 95% on potholes and major cracks in field trials.
SPEED: a 50 km stretch analysed within about 30 minutes; instant alerts for critical defects.
WORKFLOW: capture -> upload -> AI detection with GPS tagging -> prioritised repair lists and reports.
INTEGRATIONS: REST API, GeoJSON export, asset management and GIS sync.
CUSTOMERS: highway authorities, municipal corporations, road contractors, toll operators, smart city programmes, insurers.
BENEFITS: up to 70% lower inspection cost, earlier repairs, reduced accident risk, evidence-based maintenance.
PRICING: per-kilometre and annual subscription plans, quoted on request.
SUPPORT: onboarding, training, dedicated account manager, priority support on enterprise plans.
CONTACT: info@ynmdrishti.com | demo@ynmdrishti.com | +91 98765 43210
";
