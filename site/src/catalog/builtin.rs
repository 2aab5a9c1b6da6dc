//! The authored project dataset.

use super::{ProjectCatalog, ProjectRecord};

struct Entry {
    title: &'static str,
    date: &'static str,
    image: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    demo_link: &'static str,
    github_link: &'static str,
}

impl Entry {
    fn to_record(&self) -> ProjectRecord {
        ProjectRecord {
            title: self.title.to_owned(),
            date: self.date.to_owned(),
            image: self.image.to_owned(),
            description: self.description.to_owned(),
            technologies: self.technologies.iter().map(|t| (*t).to_owned()).collect(),
            demo_link: self.demo_link.to_owned(),
            github_link: self.github_link.to_owned(),
        }
    }
}

const CURRENT: [Entry; 10] = [
    Entry {
        title: "AI-Powered Task Manager",
        date: "Oct 2025",
        image: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A task management application that uses AI to prioritize tasks, suggest optimal work times, and provide productivity insights based on user patterns.",
        technologies: &["React", "Node.js", "TensorFlow.js", "MongoDB"],
        demo_link: "https://ai-task-manager.example.com",
        github_link: "https://github.com/tanaypd/ai-task-manager",
    },
    Entry {
        title: "Sustainable Living App",
        date: "Sep 2025",
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "An application that helps users track their carbon footprint, suggests eco-friendly alternatives for daily activities, and connects them with local sustainability initiatives.",
        technologies: &["Flutter", "Firebase", "Google Maps API", "Chart.js"],
        demo_link: "https://eco-living.example.com",
        github_link: "https://github.com/tanaypd/sustainable-living",
    },
    Entry {
        title: "Virtual Reality Fitness",
        date: "Aug 2025",
        image: "https://images.unsplash.com/photo-1593508512255-86ab42a8e620?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A VR fitness platform that gamifies workout routines, offers immersive training environments, and provides real-time feedback on form and performance.",
        technologies: &["Unity", "C#", "Oculus SDK", "WebXR"],
        demo_link: "https://vr-fitness.example.com",
        github_link: "https://github.com/tanaypd/vr-fitness",
    },
    Entry {
        title: "Blockchain Voting System",
        date: "Jul 2025",
        image: "https://images.unsplash.com/photo-1614064641938-3bbee52942c7?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A secure, transparent voting system built on blockchain technology, ensuring tamper-proof elections and real-time result verification.",
        technologies: &["Ethereum", "Solidity", "Web3.js", "React"],
        demo_link: "https://blockchain-vote.example.com",
        github_link: "https://github.com/tanaypd/blockchain-voting",
    },
    Entry {
        title: "Augmented Reality Navigation",
        date: "Jun 2025",
        image: "https://images.unsplash.com/photo-1567177662154-dfeb4c93b6ae?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "An AR navigation app that overlays directional guidance on the real world, highlighting points of interest and providing contextual information about surroundings.",
        technologies: &["ARKit", "ARCore", "Swift", "Kotlin"],
        demo_link: "https://ar-nav.example.com",
        github_link: "https://github.com/tanaypd/ar-navigation",
    },
    Entry {
        title: "Smart Home Energy Monitor",
        date: "May 2025",
        image: "https://images.unsplash.com/photo-1558002038-1055e2dae1d7?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A system that monitors household energy consumption, identifies energy-hungry appliances, and suggests optimization strategies to reduce electricity bills.",
        technologies: &["Raspberry Pi", "Python", "MQTT", "InfluxDB", "Grafana"],
        demo_link: "https://energy-monitor.example.com",
        github_link: "https://github.com/tanaypd/energy-monitor",
    },
    Entry {
        title: "Personalized Learning Platform",
        date: "Apr 2025",
        image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "An adaptive learning platform that tailors educational content based on individual learning styles, progress, and goals, with interactive exercises and real-time feedback.",
        technologies: &["Vue.js", "Express", "PostgreSQL", "Machine Learning"],
        demo_link: "https://adaptive-learning.example.com",
        github_link: "https://github.com/tanaypd/personalized-learning",
    },
    Entry {
        title: "Quantum Computing Simulator",
        date: "Mar 2025",
        image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A web-based simulator for quantum computing algorithms, allowing users to experiment with quantum gates, circuits, and algorithms without specialized hardware.",
        technologies: &["TypeScript", "WebAssembly", "Three.js", "Python"],
        demo_link: "https://quantum-sim.example.com",
        github_link: "https://github.com/tanaypd/quantum-simulator",
    },
    Entry {
        title: "Decentralized Social Network",
        date: "Feb 2025",
        image: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A social media platform built on decentralized protocols, giving users full control over their data and content without centralized authority or data harvesting.",
        technologies: &["IPFS", "Ethereum", "React", "GraphQL"],
        demo_link: "https://decentralized-social.example.com",
        github_link: "https://github.com/tanaypd/decentralized-social",
    },
    Entry {
        title: "Autonomous Drone Delivery",
        date: "Jan 2025",
        image: "https://images.unsplash.com/photo-1507582020474-9a35b7d455d9?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A system for managing autonomous drone deliveries, including route optimization, obstacle avoidance, and real-time tracking for urban package delivery.",
        technologies: &["ROS", "Python", "Computer Vision", "React Native"],
        demo_link: "https://drone-delivery.example.com",
        github_link: "https://github.com/tanaypd/drone-delivery",
    },
];

const ARCHIVED: [Entry; 10] = [
    Entry {
        title: "Neural Network Visualizer",
        date: "Dec 2024",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "An interactive tool for visualizing neural network architectures, training processes, and decision boundaries to help understand deep learning concepts.",
        technologies: &["D3.js", "TensorFlow.js", "React", "Flask"],
        demo_link: "https://nn-visualizer.example.com",
        github_link: "https://github.com/tanaypd/nn-visualizer",
    },
    Entry {
        title: "Cryptocurrency Portfolio Tracker",
        date: "Nov 2024",
        image: "https://images.unsplash.com/photo-1621761191319-c6fb62004040?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A comprehensive dashboard for tracking cryptocurrency investments, with real-time price updates, portfolio analytics, and tax reporting features.",
        technologies: &["Angular", "Node.js", "CoinGecko API", "MongoDB"],
        demo_link: "https://crypto-tracker.example.com",
        github_link: "https://github.com/tanaypd/crypto-tracker",
    },
    Entry {
        title: "Remote Team Collaboration Tool",
        date: "Oct 2024",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A platform designed for remote teams to collaborate effectively, featuring virtual whiteboards, asynchronous video messaging, and project management tools.",
        technologies: &["React", "Socket.io", "WebRTC", "Express"],
        demo_link: "https://remote-collab.example.com",
        github_link: "https://github.com/tanaypd/remote-collaboration",
    },
    Entry {
        title: "Natural Language Processing API",
        date: "Sep 2024",
        image: "https://images.unsplash.com/photo-1555952494-efd681c7e3f9?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A comprehensive API for natural language processing tasks, including sentiment analysis, entity recognition, language detection, and text summarization.",
        technologies: &["Python", "spaCy", "FastAPI", "Docker"],
        demo_link: "https://nlp-api.example.com",
        github_link: "https://github.com/tanaypd/nlp-api",
    },
    Entry {
        title: "3D Printing Marketplace",
        date: "Aug 2024",
        image: "https://images.unsplash.com/photo-1581094794329-c8112a89af12?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "An online marketplace connecting 3D printing enthusiasts with designers and customers, facilitating the buying, selling, and printing of 3D models.",
        technologies: &["Next.js", "Stripe", "Three.js", "PostgreSQL"],
        demo_link: "https://3d-marketplace.example.com",
        github_link: "https://github.com/tanaypd/3d-marketplace",
    },
    Entry {
        title: "Gesture-Controlled Music Player",
        date: "Jul 2024",
        image: "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A music player that can be controlled through hand gestures captured by a webcam, allowing for touchless interaction with music playback.",
        technologies: &["MediaPipe", "JavaScript", "Web Audio API", "TensorFlow.js"],
        demo_link: "https://gesture-music.example.com",
        github_link: "https://github.com/tanaypd/gesture-music",
    },
    Entry {
        title: "Automated Content Moderator",
        date: "Jun 2024",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "An AI-powered content moderation system that automatically detects and filters inappropriate text, images, and videos for online platforms.",
        technologies: &["Python", "TensorFlow", "OpenCV", "FastAPI"],
        demo_link: "https://content-moderator.example.com",
        github_link: "https://github.com/tanaypd/content-moderator",
    },
    Entry {
        title: "Procedural Landscape Generator",
        date: "May 2024",
        image: "https://images.unsplash.com/photo-1506260408121-e353d10b87c7?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A tool that generates realistic 3D landscapes procedurally, with customizable terrain, vegetation, water bodies, and weather conditions.",
        technologies: &["Unity", "C#", "Shader Graph", "Compute Shaders"],
        demo_link: "https://landscape-gen.example.com",
        github_link: "https://github.com/tanaypd/landscape-generator",
    },
    Entry {
        title: "Peer-to-Peer File Sharing",
        date: "Apr 2024",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A decentralized file sharing application that allows direct peer-to-peer transfers without intermediary servers, with end-to-end encryption.",
        technologies: &["WebRTC", "JavaScript", "Electron", "libp2p"],
        demo_link: "https://p2p-share.example.com",
        github_link: "https://github.com/tanaypd/p2p-file-sharing",
    },
    Entry {
        title: "Accessibility Checker Extension",
        date: "Mar 2024",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        description: "A browser extension that analyzes web pages for accessibility issues and suggests improvements to make content more inclusive for all users.",
        technologies: &["JavaScript", "WCAG Guidelines", "Chrome Extensions API", "Axe Core"],
        demo_link: "https://a11y-checker.example.com",
        github_link: "https://github.com/tanaypd/accessibility-checker",
    },
];

pub(super) fn catalog() -> ProjectCatalog {
    ProjectCatalog::new(
        CURRENT.iter().map(Entry::to_record).collect(),
        ARCHIVED.iter().map(Entry::to_record).collect(),
    )
}
