// src/content.rs
//! Static landing page content.
use serde::Serialize;
use serde_json::{Value, json};

pub const SITE_NAME: &str = "Genbi Kota Bengkulu";
pub const INSTAGRAM_URL: &str = "https://instagram.com/genbi_kota_bengkulu";

#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    /// Bullet or numbered points rendered after `answer`.
    #[serde(skip_serializing_if = "no_points")]
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqSection {
    pub topic: &'static str,
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickLink {
    pub href: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSlide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

fn no_points(points: &&'static [&'static str]) -> bool {
    points.is_empty()
}

const fn item(id: u32, question: &'static str, answer: &'static str) -> FaqItem {
    FaqItem {
        id,
        question,
        answer,
        points: &[],
    }
}

const fn listed(
    id: u32,
    question: &'static str,
    answer: &'static str,
    points: &'static [&'static str],
) -> FaqItem {
    FaqItem {
        id,
        question,
        answer,
        points,
    }
}

const GENBI_FAQ: &[FaqItem] = &[
    item(
        1,
        "Apa itu GenBI?",
        "GenBI adalah singkatan dari Generasi Baru Indonesia, sebuah komunitas mahasiswa penerima Beasiswa Bank Indonesia (BI) yang bertujuan membangun generasi muda unggul melalui program pengembangan diri dan pengabdian masyarakat.",
    ),
    item(2, "Kapan GenBI didirikan?", "GenBI didirikan pada 11 November 2011."),
    item(
        3,
        "Apa saja divisi yang ada di GenBI?",
        "Pendidikan, Lingkungan Hidup, Kewirausahaan, Pengabdian Masyarakat, serta Publikasi dan Sosialisasi.",
    ),
    item(
        4,
        "Apa saja 3 pilar GenBI?",
        "Frontliners, Change Agents, dan Future Leaders.",
    ),
    listed(
        5,
        "Apa Visi dan Misi GenBI?",
        "Visi: generasi unggul dan berkompeten yang menjadi agen perubahan positif. Misi:",
        &[
            "Frontliners Bank Indonesia: menjadi penyambung informasi dan mengomunikasikan kebijakan Bank Indonesia kepada masyarakat, khususnya sesama mahasiswa.",
            "Change Agents: menjadi agen perubahan yang berkontribusi dalam pembangunan bangsa dan melakukan aksi nyata di masyarakat.",
            "Future Leaders: membentuk diri menjadi calon pemimpin masa depan yang kompetitif.",
            "Memberi Kontribusi Positif: berkontribusi melalui kegiatan pemberdayaan masyarakat serta menjadi wadah pengembangan diri anggota.",
        ],
    ),
    item(
        6,
        "Apa perbedaan GenBI dengan organisasi kampus pada umumnya?",
        "GenBI adalah komunitas penerima Beasiswa Bank Indonesia yang aktif dalam kegiatan pengembangan masyarakat dan sosial, memiliki struktur binaan dari Bank Indonesia, dan beranggotakan mahasiswa dari berbagai disiplin ilmu dan universitas. Organisasi kampus umumnya berfokus pada minat, bakat, atau kepentingan akademik di lingkup jurusan, fakultas, atau universitas.",
    ),
    item(
        7,
        "Apa saja kegiatan rutin yang dilakukan GenBI setiap tahunnya?",
        "Pelatihan kepemimpinan dan softskill, seminar dan workshop, bakti sosial, penggalangan dana, aksi lingkungan, serta program literasi keuangan tentang pengelolaan keuangan dan kebijakan Bank Indonesia.",
    ),
    item(
        8,
        "Apa bentuk dukungan nyata Bank Indonesia terhadap GenBI?",
        "Beasiswa dana pendidikan dan biaya hidup, pelatihan kepemimpinan dan literasi keuangan, jaringan profesional dan alumni, serta wadah untuk berkontribusi melalui kegiatan sosial dan pemberdayaan masyarakat.",
    ),
    item(
        9,
        "Apa manfaat yang dirasakan masyarakat dengan adanya GenBI?",
        "Program sosial dan edukasi GenBI meningkatkan literasi keuangan masyarakat, mendorong ekonomi digital, dan berkontribusi dalam pembangunan daerah melalui kegiatan pendidikan, kesehatan, dan kewirausahaan.",
    ),
];

const RUPIAH_FAQ: &[FaqItem] = &[
    item(
        1,
        "Apa itu Rupiah?",
        "Rupiah adalah uang yang dikeluarkan oleh Negara Kesatuan Republik Indonesia sebagaimana dimaksud dalam Undang-Undang tentang Mata Uang.",
    ),
    listed(
        2,
        "Sebutkan apa saja jenis-jenis Rupiah?",
        "",
        &[
            "Uang kartal: uang fisik seperti uang kertas dan logam.",
            "Uang giral: simpanan di bank yang dapat digunakan melalui cek, bilyet giro, atau transfer elektronik.",
            "Uang elektronik: nilai uang digital yang disimpan secara elektronik.",
        ],
    ),
    item(
        3,
        "Di mana pembuatan uang Rupiah?",
        "Pembuatan uang Rupiah dilakukan oleh Perum Peruri di pabriknya yang berlokasi di Ciampel, Karawang, Jawa Barat, berdasarkan amanat dari Bank Indonesia.",
    ),
    item(
        4,
        "Kapan uang Rupiah beredar sebagai alat transaksi yang sah di Indonesia?",
        "30 Oktober 1946.",
    ),
    listed(
        5,
        "Uang Rupiah terbuat dari apa?",
        "",
        &[
            "Uang kertas: berbahan dasar serat kapas sehingga lebih kuat dan tahan lama.",
            "Uang logam: dibuat dari berbagai jenis logam seperti nikel dan baja.",
        ],
    ),
    item(
        6,
        "Apakah yang dimaksud dengan CBP Rupiah?",
        "Program Cinta, Bangga, Paham (CBP) Rupiah adalah kampanye Bank Indonesia untuk menanamkan tiga nilai utama dalam penggunaan Rupiah: Cinta, Bangga, dan Paham.",
    ),
    item(
        7,
        "Apa fungsi CBP Rupiah?",
        "Menumbuhkan rasa cinta terhadap mata uang sendiri, bangga menggunakannya sehari-hari, dan paham fungsi serta peran penting Rupiah dalam perekonomian Indonesia.",
    ),
    item(
        8,
        "Bangga Rupiah adalah?",
        "Perwujudan kemampuan masyarakat memahami Rupiah sebagai alat pembayaran yang sah, simbol kedaulatan NKRI, dan alat pemersatu bangsa.",
    ),
    listed(
        9,
        "Bagaimana cara merawat uang Rupiah dalam 5J?",
        "",
        &[
            "Jangan dilipat",
            "Jangan dicoret",
            "Jangan diremas",
            "Jangan distepler",
            "Jangan dibasahi",
        ],
    ),
    listed(
        10,
        "Sebutkan apa yang dimaksud dengan 3D dalam Rupiah?",
        "",
        &["Dilihat", "Diraba", "Diterawang"],
    ),
];

const QRIS_FAQ: &[FaqItem] = &[
    item(
        1,
        "Apa itu QRIS?",
        "QRIS (Quick Response Code Indonesian Standard) adalah standar kode QR nasional untuk pembayaran digital di Indonesia yang ditetapkan oleh Bank Indonesia.",
    ),
    item(
        2,
        "Siapa yang mengelola QRIS?",
        "QRIS dikelola oleh Bank Indonesia bekerja sama dengan industri sistem pembayaran melalui Asosiasi Sistem Pembayaran Indonesia (ASPI).",
    ),
    listed(
        3,
        "Bagaimana cara menggunakan QRIS untuk membayar?",
        "",
        &[
            "Buka aplikasi pembayaran yang mendukung QRIS.",
            "Pindai (scan) kode QRIS di kasir/merchant.",
            "Masukkan nominal (jika diperlukan) dan konfirmasi pembayaran.",
            "Selesaikan otentikasi sesuai aplikasi, lalu simpan bukti transaksi.",
        ],
    ),
    listed(
        4,
        "Apa perbedaan QRIS statis dan dinamis?",
        "",
        &[
            "Statis: nominal diisi oleh pembayar; kode bisa dicetak dan digunakan berulang.",
            "Dinamis: nominal dihasilkan otomatis per transaksi; kode berbeda di setiap transaksi.",
        ],
    ),
    listed(
        5,
        "Apa manfaat menggunakan QRIS bagi pengguna dan merchant?",
        "",
        &[
            "Praktis, cepat, dan aman karena tanpa uang tunai.",
            "Satu QR untuk semua aplikasi pembayaran berlisensi (interoperabel).",
            "Mengurangi biaya pengelolaan uang tunai bagi merchant.",
            "Transaksi tercatat sehingga memudahkan pencatatan usaha.",
        ],
    ),
    listed(
        6,
        "Apa saja tantangan utama implementasi QRIS secara nasional dan bagaimana strategi pemerintah mengatasinya?",
        "Tantangannya mencakup keterbatasan jaringan internet di wilayah terpencil, rendahnya literasi digital, dan resistensi terhadap peralihan dari transaksi tunai. Strateginya:",
        &[
            "Program edukasi dan literasi digital.",
            "Kolaborasi dengan operator seluler untuk memperluas jaringan internet.",
            "Program digitalisasi UMKM melalui pendampingan.",
            "Penyediaan QRIS offline untuk transaksi tertentu.",
            "Insentif bagi pelaku usaha yang beralih ke pembayaran digital.",
        ],
    ),
    item(
        7,
        "Apa peran QRIS dalam mendukung transaksi lintas negara di kawasan ASEAN?",
        "Melalui QRIS cross-border, wisatawan dari negara mitra dapat membayar di Indonesia menggunakan aplikasi dari negara asalnya, dan sebaliknya. Bank Indonesia telah bekerja sama dengan Thailand, Malaysia, dan Singapura untuk interoperabilitas pembayaran berbasis QR.",
    ),
    listed(
        8,
        "Bagaimana proses pendaftaran pedagang agar dapat menerima pembayaran QRIS?",
        "Pedagang mendaftar ke Penyelenggara Jasa Sistem Pembayaran (PJSP) seperti bank atau dompet digital. Umumnya diperlukan:",
        &[
            "Pengisian formulir pendaftaran merchant.",
            "Verifikasi identitas (KTP) dan informasi usaha.",
            "NPWP jika ada.",
            "Nomor rekening bank atau e-wallet untuk menerima dana.",
        ],
    ),
    listed(
        9,
        "Apa langkah keamanan yang diterapkan untuk melindungi transaksi QRIS?",
        "Keamanan transaksi QRIS dijaga melalui beberapa lapisan:",
        &[
            "Enkripsi data selama pengiriman.",
            "Verifikasi dua langkah untuk pengguna aplikasi pembayaran.",
            "Penggunaan standar ISO dalam pengembangan QRIS.",
            "Audit dan sertifikasi sistem PJSP oleh otoritas yang ditunjuk BI.",
            "Penyuluhan keamanan kepada pengguna.",
        ],
    ),
    item(
        10,
        "Bagaimana kontribusi QRIS menuju visi \"Indonesia Emas 2045\"?",
        "QRIS mempercepat digitalisasi sistem pembayaran nasional dengan transaksi non-tunai yang cepat, efisien, dan inklusif, memperluas akses layanan keuangan formal, dan menjadi bagian infrastruktur digital yang mendukung ekonomi berbasis inovasi.",
    ),
];

pub const FAQ_SECTIONS: &[FaqSection] = &[
    FaqSection {
        topic: "genbi",
        title: "Pertanyaan Seputar GenBI",
        items: GENBI_FAQ,
    },
    FaqSection {
        topic: "rupiah",
        title: "Pertanyaan Seputar Rupiah",
        items: RUPIAH_FAQ,
    },
    FaqSection {
        topic: "qris",
        title: "Pertanyaan Seputar QRIS",
        items: QRIS_FAQ,
    },
];

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        href: "/pengurus",
        title: "Pengurus",
        desc: "Lihat struktur organisasi Genbi Kota Bengkulu dan profil pengurus",
        icon: "users",
    },
    QuickLink {
        href: "/kegiatans",
        title: "Kegiatan",
        desc: "Jelajahi kegiatan Genbi Kota Bengkulu",
        icon: "calendar-days",
    },
    QuickLink {
        href: "#faq",
        title: "FAQ",
        desc: "Pertanyaan yang sering ditanyakan seputar Genbi",
        icon: "help-circle",
    },
    QuickLink {
        href: INSTAGRAM_URL,
        title: "Instagram",
        desc: "Ikuti update terbaru Genbi di Instagram",
        icon: "instagram",
    },
];

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        image: "/images/hero-1.webp",
        title: "Generasi Baru Indonesia",
        subtitle: "Komunitas penerima Beasiswa Bank Indonesia Kota Bengkulu",
    },
    HeroSlide {
        image: "/images/hero-2.webp",
        title: "Frontliners, Change Agents, Future Leaders",
        subtitle: "Tiga pilar yang kami jalankan bersama",
    },
    HeroSlide {
        image: "/images/hero-3.webp",
        title: "Aksi Nyata untuk Masyarakat",
        subtitle: "Pendidikan, lingkungan, kewirausahaan, dan literasi keuangan",
    },
];

pub fn faq_section(topic: &str) -> Option<&'static FaqSection> {
    let topic = topic.trim().to_lowercase();
    FAQ_SECTIONS.iter().find(|s| s.topic == topic)
}

/// `WebSite` and `Organization` structured data for the landing page.
pub fn json_ld(site_url: &str) -> Vec<Value> {
    let site_url = site_url.trim_end_matches('/');
    vec![
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": site_url,
            "potentialAction": {
                "@type": "SearchAction",
                "target": format!("{}/kegiatans?query={{search_term_string}}", site_url),
                "query-input": "required name=search_term_string"
            }
        }),
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": SITE_NAME,
            "url": site_url,
            "logo": format!("{}/genbilogo.svg", site_url),
            "sameAs": [INSTAGRAM_URL]
        }),
    ]
}
