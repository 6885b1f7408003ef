use std::sync::LazyLock;

use moskill_lead::ContactService;
use regex::Regex;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("youtube id pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifications {
    pub frame_material: &'static str,
    pub mesh_material: &'static str,
    pub mesh_colors: &'static [&'static str],
    pub usage: &'static [&'static str],
    pub max_size: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image(&'static str),
    /// YouTube video id
    Video(String),
}

/// Returns the video id of a youtube.com or youtu.be link.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

#[derive(Debug)]
pub struct Product {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub hero_image: &'static str,
    pub overview: &'static str,
    pub features: &'static [&'static str],
    pub specifications: Specifications,
    media: &'static [&'static str],
    pub faqs: &'static [Faq],
    /// Contact form option preselected by the product's quote link
    pub service: Option<ContactService>,
}

impl Product {
    pub fn media(&self) -> Vec<Media> {
        self.media
            .iter()
            .copied()
            .map(str::trim)
            .map(|url| match youtube_video_id(url) {
                Some(id) => Media::Video(id.to_owned()),
                None => Media::Image(url),
            })
            .collect()
    }

    pub fn images(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.hero_image).chain(
            self.media
                .iter()
                .copied()
                .map(str::trim)
                .filter(|url| youtube_video_id(url).is_none()),
        )
    }

    pub fn quote_href(&self) -> String {
        match self.service {
            Some(service) => format!("/contact?service={}", service.as_ref()),
            None => "/contact".to_owned(),
        }
    }
}

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.slug == slug)
}

static PRODUCTS: [Product; 6] = [
    Product {
        slug: "horizontal-mosquito-net",
        name: "Horizontal Mosquito Net",
        tagline: "Elegant and space-efficient insect protection for large openings",
        hero_image: "https://res.cloudinary.com/du3er2t49/image/upload/v1741181646/uploads/f8wajlcca6zd3y6dswor.webp",
        overview: "The Horizontal Mosquito Net is an elegant and space-efficient solution for keeping insects out while maintaining ventilation and natural light. It is best suited for large openings such as balconies, French windows, sliding and openable doors and windows. This retractable net system operates smoothly on a horizontal track, making it a user-friendly and stylish choice for modern homes, offices, and commercial spaces.",
        features: &[
            "Retractable Design: Slides horizontally with minimal effort, easy to open and close",
            "Premium Material: High-quality aluminum frame with special polyester mesh",
            "Child & Pet Safety: Smooth and safe design to prevent injuries",
            "Weatherproof & Dust-Resistant: Ideal for all climates",
            "Customizable Size & Finish: Various colors, dimensions, and frame finishes available",
            "Maximum Airflow & Visibility: Ensures a comfortable living experience",
            "Fits Minimum Size & Matches Color: Can be customized to fit even the smallest windows and match existing color schemes",
            "Single Track Installation: Can be fitted on a single track and cover the entire window",
            "Universal Compatibility: Can be installed on any type of window",
        ],
        specifications: Specifications {
            frame_material: "Aluminum (Powder-coated/Anodized/Wooden Finish)",
            mesh_material: "High-quality polyester",
            mesh_colors: &["Black", "Grey"],
            usage: &["French windows", "Sliding doors", "Balconies", "Patios"],
            max_size: "Up to 20 feet center opening",
        },
        media: &[
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181644/uploads/ruf55x4qkeotzumixwmz.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181648/uploads/t5qz8jc0ige3jfjndbx5.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181642/uploads/ugokmsqkcnk7by6uevw2.webp",
        ],
        faqs: &[
            Faq {
                question: "How easy is it to operate the horizontal mosquito net?",
                answer: "The horizontal mosquito net is designed for effortless operation. It slides smoothly along its track, allowing you to open or close it with minimal effort. The net can be easily operated with one hand, making it convenient for users of all ages.",
            },
            Faq {
                question: "Can the horizontal mosquito net be customized to fit my specific window or door size?",
                answer: "Yes, our horizontal mosquito nets are fully customizable. We take precise measurements of your windows or doors to ensure a perfect fit. The nets can be tailored to various sizes, up to 20 feet for center-opening designs, accommodating even the largest openings.",
            },
            Faq {
                question: "What maintenance is required for the horizontal mosquito net?",
                answer: "Maintenance for our horizontal mosquito nets is minimal. Regular dusting with a soft brush or vacuum cleaner attachment is usually sufficient. For deeper cleaning, you can gently wipe the mesh with a damp cloth and mild soap solution. The tracks should be kept clean and free of debris to ensure smooth operation.",
            },
            Faq {
                question: "How durable is the mesh used in the horizontal mosquito net?",
                answer: "We use high-quality polyester mesh that is designed for durability and longevity. The mesh is resistant to tearing and weathering, ensuring that it maintains its effectiveness against insects while withstanding daily use and environmental factors.",
            },
            Faq {
                question: "Can the horizontal mosquito net be installed on all types of windows and doors?",
                answer: "Our horizontal mosquito nets are versatile and can be installed all types of windows and doors, including sliding doors, French windows, and large balcony openings. During the consultation, our experts will assess your specific requirements and recommend the best installation method for your space.",
            },
        ],
        service: Some(ContactService::HorizontalMosquitoNet),
    },
    Product {
        slug: "vertical-mosquito-net",
        name: "Vertical Mosquito Net",
        tagline: "Effortless and sleek mosquito protection for windows and doors",
        hero_image: "https://res.cloudinary.com/du3er2t49/image/upload/v1741181659/uploads/moobiiaxxjq6fxzsh6qd.webp",
        overview: "The Vertical Mosquito Net is designed for easy operation and seamless integration into modern interiors. Ideal for windows and small openings, this net features a rolling mechanism that allows you to pull it down when needed and retract it effortlessly when not in use. Its durable mesh ensures long-term protection against insects while allowing natural airflow.",
        features: &[
            "Smooth Rolling Mechanism: Effortless pull-down and retract functionality",
            "Space-Saving Design: Perfect for compact window spaces",
            "Durable and Lightweight: High-quality aluminum frame and robust mesh",
            "Customizable Sizes: Available for various window and door dimensions",
            "Maintains Airflow: Keeps insects out while ensuring ventilation",
            "Weather-Resistant: Suitable for all seasons and climate conditions",
        ],
        specifications: Specifications {
            frame_material: "Aluminum (Powder-coated/Anodized/Wooden Finish)",
            mesh_material: "High-quality polyester",
            mesh_colors: &["Black", "Grey"],
            usage: &["Windows", "Small balconies", "Openable doors"],
            max_size: "Up to 5 feet width and 6 feet height",
        },
        media: &[
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181657/uploads/syzbxk2ps2hxphu2du77.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181655/uploads/enadthf13xqb90jaci2y.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181661/uploads/raabwdqi56xxlrvtmtai.webp",
        ],
        faqs: &[
            Faq {
                question: "Can the vertical mosquito net be used for all types of windows?",
                answer: "Yes, our vertical mosquito nets are designed to fit a variety of windows, including sliding, casement, and fixed windows. We customize the net to match your specific window dimensions for a seamless fit.",
            },
            Faq {
                question: "Is the mesh of the vertical mosquito net durable?",
                answer: "Absolutely. The high-quality polyester mesh is resistant to wear and tear, ensuring long-lasting insect protection while maintaining clarity and airflow.",
            },
            Faq {
                question: "How do I clean and maintain my vertical mosquito net?",
                answer: "Regular dusting with a soft cloth or a vacuum cleaner is recommended. For a deeper clean, gently wipe the mesh with a damp cloth and mild soap. Keep the rolling mechanism free of debris for smooth operation.",
            },
            Faq {
                question: "Can the vertical mosquito net be installed on doors?",
                answer: "Yes, the vertical mosquito net is suitable for openable doors, provided they fall within the size specifications. Our team can assess and customize the installation for the best fit.",
            },
            Faq {
                question: "Is the installation process complicated?",
                answer: "Not at all! Our professional installation ensures a quick and hassle-free setup. The net is securely mounted on the window or door frame for smooth and long-term functionality.",
            },
        ],
        service: Some(ContactService::VerticalMosquitoNet),
    },
    Product {
        slug: "bird-netting",
        name: "Bird Netting",
        tagline: "Strong and durable protection against birds for open spaces",
        hero_image: "https://res.cloudinary.com/du3er2t49/image/upload/v1741181634/uploads/z81lhge6mnjkvcdmu0f2.webp",
        overview: "Bird Netting is an effective solution to prevent birds from entering residential, commercial, and industrial spaces. Designed to be nearly invisible from a distance, this netting helps maintain cleanliness by keeping birds away from balconies, terraces, windows, and open spaces. Made from high-quality, weather-resistant material, our bird netting provides long-term protection while allowing proper airflow and visibility.",
        features: &[
            "Durable and weather-resistant material for long-term use",
            "Nearly invisible design that does not obstruct views",
            "Prevents bird-related damage and hygiene issues",
            "Custom-fit for various installations, including balconies and terraces",
            "Allows unrestricted airflow and natural light",
            "Easy to maintain and clean",
        ],
        specifications: Specifications {
            frame_material: "N/A (Installed with hooks and anchors)",
            mesh_material: "High-strength UV-stabilized polyethylene",
            mesh_colors: &["Transparent", "Black", "White"],
            usage: &[
                "Balconies",
                "Terraces",
                "Windows",
                "Industrial spaces",
                "Warehouses",
            ],
            max_size: "Customizable as per requirement",
        },
        media: &[
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181636/uploads/oucruqkspskmkl3arytc.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181638/uploads/ghjrnxpw4w3nqrcviqko.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181639/uploads/gxx3vq7dzye6sdatwvjd.webp",
        ],
        faqs: &[
            Faq {
                question: "Is bird netting safe for birds?",
                answer: "Yes, our bird netting is designed to keep birds away without harming them. The material prevents birds from entering protected areas while ensuring their safety.",
            },
            Faq {
                question: "Can bird netting withstand harsh weather conditions?",
                answer: "Yes, the netting is made from UV-stabilized polyethylene, which is weather-resistant and durable, making it suitable for long-term outdoor use.",
            },
            Faq {
                question: "How is bird netting installed?",
                answer: "Our team installs the net using hooks, anchors, and cables to ensure a secure and long-lasting fit. The installation is non-intrusive and does not damage walls or surfaces.",
            },
            Faq {
                question: "Can bird netting be removed and reinstalled?",
                answer: "Yes, the netting can be removed if necessary and reinstalled as required. However, professional assistance is recommended for proper handling.",
            },
            Faq {
                question: "Does bird netting block airflow or sunlight?",
                answer: "No, bird netting is designed to be lightweight and porous, allowing natural airflow and sunlight while keeping birds out.",
            },
        ],
        service: Some(ContactService::BirdNetting),
    },
    Product {
        slug: "invisible-grills",
        name: "Invisible Grills",
        tagline: "Modern and secure alternative to traditional safety grills",
        hero_image: "https://res.cloudinary.com/du3er2t49/image/upload/v1741181649/uploads/y0qo2q7qdtvzsryfuhyy.webp",
        overview: "Invisible Grills provide a sleek and modern safety solution for balconies, windows, and open areas. Made from high-strength stainless steel cables, these grills offer maximum safety without obstructing the view. Designed for residential and commercial properties, invisible grills provide security while maintaining aesthetic appeal. They are rust-resistant, lightweight (putting less weight on windows), easy to maintain, and highly durable, making them an ideal alternative to bulky iron grills.",
        features: &[
            "Unobstructed panoramic view with a minimalist design",
            "High-tensile strength stainless steel cables for maximum safety",
            "Rust-resistant, weatherproof, and lightweight for less strain on windows",
            "Customizable installation for balconies, windows, and open areas",
            "Low maintenance and easy to clean",
            "Child and pet-friendly design with no sharp edges",
        ],
        specifications: Specifications {
            frame_material: "Aluminum strong profile with high-tensile stainless steel cables",
            mesh_material: "SS 304/316 - 2.5 mm Nylon Coated Wire (Imported)",
            mesh_colors: &["Metallic Silver"],
            usage: &[
                "Balconies",
                "Windows",
                "High-rise apartments",
                "Penthouse",
                "Commercial spaces",
            ],
            max_size: "Customizable as per requirement",
        },
        media: &[
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181650/uploads/sqpxgppb2vja11aamxek.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181652/uploads/k5wewqochsnwjr3q0w3d.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741181653/uploads/vzns2zucqldv3vjpptpl.webp",
        ],
        faqs: &[
            Faq {
                question: "Are invisible grills strong enough to ensure safety?",
                answer: "Yes, our invisible grills use high-tensile strength stainless steel cables and strong aluminium profile that can withstand high pressure, ensuring safety for residents.",
            },
            Faq {
                question: "Can invisible grills be installed on all types of balconies and windows?",
                answer: "Yes, invisible grills are customizable and can be installed on different types of balconies, windows, and open spaces, regardless of size.",
            },
            Faq {
                question: "How do invisible grills compare to traditional iron grills?",
                answer: "Invisible grills offer the same level of safety as traditional grills but with a modern, unobstructed design that does not block views.",
            },
            Faq {
                question: "Are invisible grills rust-resistant?",
                answer: "Yes, the stainless steel cables are coated to prevent rusting and corrosion, making them suitable for long-term outdoor use.",
            },
            Faq {
                question: "What are the specifications of the SS 304 nylon-coated wire system?",
                answer: "The SS 304 system consists of a 2.5 mm nylon-coated imported wire with a 2-inch vertical spacing between wires. It includes aluminum top and bottom sections with a white powder-coated cover profile, plastic rollers, SS 304 washers and fixing screws, and SS 316 four-way stiffeners. For installation, SS 304 - 3\" concrete fasteners are used for RCC structures or as per requirements, along with aluminum rivets for securing the cover to the section.",
            },
        ],
        service: Some(ContactService::InvisibleGrills),
    },
    Product {
        slug: "honeycomb-mosquito-net-pleated",
        name: "Honeycomb with Mosquito Net Pleated",
        tagline: "Dual-layer protection with style and efficiency",
        hero_image: "https://res.cloudinary.com/du3er2t49/image/upload/v1741712812/skzepp6cgdtgdwgmpbhz.webp",
        overview: "The Honeycomb with Mosquito Net Pleated is an innovative solution that combines the benefits of a pleated mosquito net with a stylish honeycomb structure. It offers dual-layer protection against insects and enhances privacy while maintaining natural airflow. Ideal for large windows, doors, and balconies, this system ensures a modern aesthetic with high functionality.",
        features: &[
            "Dual-Layer Protection: Combines a pleated mosquito net with a honeycomb structure",
            "Superior Insulation: Regulates temperature while keeping insects out",
            "Stylish & Modern: Enhances aesthetics with a sleek, contemporary look",
            "Smooth Operation: Effortless opening and closing mechanism",
            "Customizable Sizes: Available in various dimensions to fit different spaces",
            "Durable & Weatherproof: Resistant to dust, moisture, and wear",
        ],
        specifications: Specifications {
            frame_material: "Aluminum (Powder-coated/Anodized Finish)",
            mesh_material: "Premium polyester pleated mesh",
            mesh_colors: &["Black", "Grey"],
            usage: &["Balconies", "French windows", "Sliding doors"],
            max_size: "Up to 20 feet width",
        },
        media: &[
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741712849/zlni97b0u2tvks95gjxe.webp",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741712925/rx3uqiygslcixwz4t1xt.webp",
            "https://youtu.be/eBYmMT8qTTI?si=ahm0g-Ju5z5uYJf8",
        ],
        faqs: &[
            Faq {
                question: "What makes the honeycomb with mosquito net pleated unique?",
                answer: "It combines a pleated mosquito net with a honeycomb structure for added insulation, privacy, and insect protection.",
            },
            Faq {
                question: "Is it suitable for all weather conditions?",
                answer: "Yes, the materials used are weather-resistant, ensuring durability and efficiency throughout the year.",
            },
            Faq {
                question: "Can I customize the size and color?",
                answer: "Yes, it is available in custom sizes and different mesh colors to match your interior.",
            },
            Faq {
                question: "How easy is it to clean and maintain?",
                answer: "It requires minimal maintenance. Regular dusting and occasional cleaning with a damp cloth are enough to keep it in great condition.",
            },
            Faq {
                question: "Can this net be installed on sliding doors?",
                answer: "Yes, it is designed for sliding doors, large windows, and balconies.",
            },
        ],
        service: None,
    },
    Product {
        slug: "aluminium-mosquito-net-safety",
        name: "Aluminium Mosquito Net with Safety",
        tagline: "Strong and secure mosquito protection for homes and offices",
        hero_image: "https://res.cloudinary.com/du3er2t49/image/upload/v1741711320/tocowgofj837fnfipceh.webp",
        overview: "The Aluminium Mosquito Net with Safety is designed for enhanced security and durability while keeping insects out. Made with a high-strength aluminum frame and a finely woven stainless steel mesh, it provides superior protection against mosquitoes, dust, and external elements. Ideal for residential and commercial spaces, this net ensures maximum airflow without compromising safety.",
        features: &[
            "High-Strength Aluminum Frame: Rust-resistant and long-lasting",
            "Stainless Steel Mesh: Strong and secure against insects and intruders",
            "Child & Pet Safe: Durable design ensures added safety",
            "Clear Visibility & Ventilation: Allows fresh air without obstruction",
            "Customizable Designs: Available in various sizes and finishes",
            "Weather & Corrosion Resistant: Ideal for all climates",
        ],
        specifications: Specifications {
            frame_material: "Aluminum (Powder-coated/Anodized Finish)",
            mesh_material: "Stainless steel (SS316)",
            mesh_colors: &["Black", "Grey"],
            usage: &["Windows", "Doors", "Balconies", "Commercial buildings"],
            max_size: "Custom sizes available",
        },
        media: &[
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741712343/pnvv5tvxabra4kwk29zi.jpg ",
            "https://res.cloudinary.com/du3er2t49/image/upload/v1741711320/tocowgofj837fnfipceh.webp ",
            "https://youtu.be/IelhTi6ByF4?si=9i-yNRJdbUQpCasv ",
        ],
        faqs: &[
            Faq {
                question: "How strong is the aluminum mosquito net?",
                answer: "The aluminum frame combined with stainless steel mesh provides high durability, making it strong enough to resist external impact.",
            },
            Faq {
                question: "Is the net rust-proof and weather-resistant?",
                answer: "Yes, the aluminum frame is powder-coated to prevent rusting, and the stainless steel mesh is resistant to corrosion and weather conditions.",
            },
            Faq {
                question: "Can I install this net on my office windows?",
                answer: "Yes, it is suitable for both residential and commercial spaces, including office windows and doors.",
            },
            Faq {
                question: "Does the net block airflow or visibility?",
                answer: "No, the fine mesh ensures excellent ventilation and clear visibility while keeping insects out.",
            },
            Faq {
                question: "Is professional installation required?",
                answer: "It is recommended for best results, but it can also be installed DIY with proper guidance.",
            },
        ],
        service: None,
    },
];
