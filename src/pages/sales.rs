use log::info;
use yew::prelude::*;

use crate::components::countdown_display::CountdownDisplay;
use crate::components::cta_button::CtaButton;
use crate::components::disclosure::{DisclosureList, FaqEntry};
use crate::components::section::Section;
use crate::config;
use crate::navigation::{NavigationHandle, NavigationPort};

pub fn scroll_to_offer(navigation: &dyn NavigationPort) {
    info!("Scrolling to offer");
    navigation.scroll_into_view(config::OFFER_ANCHOR_ID);
}

pub fn initiate_checkout(navigation: &dyn NavigationPort) {
    info!("Redirecting to checkout");
    navigation.redirect(config::CHECKOUT_URL);
}

fn star_rating(stars: usize) -> String {
    "★".repeat(stars)
}

struct Character {
    emoji: &'static str,
    color: &'static str,
    name: &'static str,
    line: &'static str,
}

struct Card {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
    stars: usize,
}

const NOT_NEEDED: [&str; 4] = [
    "Mostrar o rosto",
    "Ter seguidores",
    "Comprar equipamentos caros",
    "Saber editar profissionalmente",
];

const CHARACTERS: [Character; 3] = [
    Character { emoji: "🥕", color: "#f97316", name: "Cenoura Reclamona", line: "Por que você me deixou na geladeira?" },
    Character { emoji: "💳", color: "#3b82f6", name: "Cartão Sincero", line: "Sério que você vai comprar isso?" },
    Character { emoji: "🧊", color: "#94a3b8", name: "Geladeira Fofoqueira", line: "Eu vi o que você comeu ontem à noite..." },
];

const OPPORTUNITIES: [(&str, &str); 6] = [
    ("📈", "Crescendo páginas dark"),
    ("👥", "Monetizando com afiliados"),
    ("⚡", "Vendendo produtos próprios"),
    ("📱", "Criando canais infantis"),
    ("💲", "Faturando com TikTok Shop"),
    ("▶", "Ganhando com AdSense"),
];

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial { name: "Lucas M.", role: "Criador de Conteúdo", text: "Em 2 semanas meu canal dark de curiosidades explodiu. A técnica do loop é surreal!", stars: 5 },
    Testimonial { name: "Ana Paula", role: "Afiliada", text: "Nunca imaginei que uma cafeteira falante me faria vender tanto como afiliada. O método é direto ao ponto.", stars: 5 },
    Testimonial { name: "Ricardo S.", role: "Empreendedor", text: "O plano de 7 dias é perfeito. Segui cada passo e já tenho 3 vídeos com mais de 50k views.", stars: 5 },
];

const CURRICULUM: [Card; 8] = [
    Card { icon: "🎬", title: "Estrutura do Vídeo Viral", desc: "As 5 partes: Gancho forte, conflito, frase impactante e final que gera comentário." },
    Card { icon: "📱", title: "Modelo de Roteiro Pronto", desc: "Fórmula simples que funciona em qualquer nicho (fitness, financeiro, educação, casa)." },
    Card { icon: "⚡", title: "Prompt Profissional 3D", desc: "Gere imagens estilo Pixar com iluminação cinematográfica em formato 9:16." },
    Card { icon: "▶", title: "Ferramentas de Animação", desc: "Domine VEO, Pika, CapCut e Luma para dar vida aos seus personagens." },
    Card { icon: "🎙", title: "Vozes Realistas", desc: "Criação de voz com ElevenLabs e outras ferramentas de ponta." },
    Card { icon: "🔁", title: "Técnica do Loop Infinito", desc: "O segredo que multiplica visualizações automaticamente." },
    Card { icon: "💲", title: "6 Formas de Monetizar", desc: "Estratégias reais para colocar dinheiro no bolso com seus vídeos." },
    Card { icon: "📅", title: "Plano Prático de 7 Dias", desc: "Um roteiro dia após dia para você começar do absoluto zero." },
];

const BENEFITS: [&str; 5] = [
    "Criar 1 vídeo por dia em menos de 30 minutos",
    "Construir audiência sem exposição",
    "Gerar tráfego orgânico todos os dias",
    "Criar ativos digitais que trabalham por você",
    "Monetizar com afiliados ou produtos próprios",
];

const DELIVERABLES: [Card; 6] = [
    Card { icon: "🎁", title: "Ebook Completo", desc: "Passo a passo do zero à monetização." },
    Card { icon: "📱", title: "Modelos de Roteiro", desc: "Scripts prontos para copiar e colar." },
    Card { icon: "⚡", title: "Estrutura Viral", desc: "A lógica validada por trás dos milhões de views." },
    Card { icon: "🔁", title: "Técnicas de Retenção", desc: "Como manter as pessoas assistindo até o fim." },
    Card { icon: "💲", title: "Estratégias de Venda", desc: "Como transformar views em dinheiro real." },
    Card { icon: "📅", title: "Plano de 7 Dias", desc: "O guia prático para agir agora." },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Preciso saber editar vídeos?",
        answer: "Não! O método ensina como usar ferramentas de IA que fazem o trabalho pesado por você. Se você sabe arrastar e soltar, você consegue fazer.",
    },
    FaqEntry {
        question: "Quanto tempo demora para ver resultados?",
        answer: "Seguindo o plano de 7 dias, você terá seu primeiro vídeo pronto e postado em uma semana. Os resultados variam, mas a consistência é a chave.",
    },
    FaqEntry {
        question: "O acesso é vitalício?",
        answer: "Sim! Uma vez adquirido, o ebook e todos os modelos são seus para sempre, incluindo atualizações futuras.",
    },
    FaqEntry {
        question: "Como recebo o material?",
        answer: "Imediatamente após a confirmação do pagamento, você receberá um e-mail com o link para download e acesso à área de membros.",
    },
];

const PAYMENT_METHODS: [&str; 4] = ["VISA", "Mastercard", "PIX", "PayPal"];

#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let navigation = use_context::<NavigationHandle>().unwrap_or_else(NavigationHandle::browser);

    let on_scroll_to_offer = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| scroll_to_offer(navigation.port()))
    };

    let on_checkout = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| initiate_checkout(navigation.port()))
    };

    html! {
        <div class="sales-page">
            // Hero
            <header class="hero">
                <div class="hero-inner fade-in-up">
                    <span class="hero-badge">{"Método Exclusivo 2026"}</span>
                    <h1>
                        {"Crie Vídeos Virais com IA "}
                        <span class="highlight">{"Sem Aparecer"}</span>
                        {", Sem Câmera e Sem Saber Editar"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Transforme objetos comuns em personagens que geram milhões de visualizações e aprenda a monetizar cada vídeo."}
                    </p>
                    <CtaButton onclick={on_scroll_to_offer}>
                        {"QUERO CRIAR MEU PRIMEIRO VÍDEO VIRAL AGORA →"}
                    </CtaButton>
                    <p class="hero-note">{"🛡 Acesso imediato após o pagamento"}</p>
                </div>
            </header>

            // Belief breaking
            <Section class="dark">
                <div class="two-columns">
                    <div>
                        <h2>{"Você não precisa de nada disso para ter sucesso:"}</h2>
                        <ul class="cross-list">
                            { for NOT_NEEDED.iter().map(|item| html! {
                                <li><span class="cross">{"✕"}</span>{*item}</li>
                            }) }
                        </ul>
                    </div>
                    <div class="quote-card">
                        <p class="quote">
                            {"\"Com Inteligência Artificial, qualquer objeto pode virar um personagem viral — exatamente como mostrado no método "}
                            <span class="accent">{"Objetos que Falam"}</span>
                            {".\""}
                        </p>
                        <div class="characters">
                            { for CHARACTERS.iter().map(|c| html! {
                                <div class="character">
                                    <div class="character-emoji" style={format!("background: {};", c.color)}>{c.emoji}</div>
                                    <div>
                                        <p class="character-name">{c.name}</p>
                                        <p class="character-line">{format!("\"{}\"", c.line)}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <p class="views-claim">{"E isso está gerando milhões de views."}</p>
                    </div>
                </div>
            </Section>

            // Opportunity
            <Section>
                <div class="section-heading">
                    <h2>{"A Maior Oportunidade da História"}</h2>
                    <p>{"Enquanto a maioria ainda acha que precisa aparecer, criadores anônimos estão dominando."}</p>
                </div>
                <div class="grid three">
                    { for OPPORTUNITIES.iter().map(|(icon, text)| html! {
                        <div class="tile centered">
                            <div class="tile-icon">{*icon}</div>
                            <p class="tile-title">{*text}</p>
                        </div>
                    }) }
                </div>
                <div class="callout">
                    <p>{"A janela ainda está aberta. Você vai aproveitar ou vai esperar o mercado saturar?"}</p>
                </div>
            </Section>

            // Testimonials
            <Section class="light">
                <div class="section-heading">
                    <h2>{"Quem Já Está Aplicando"}</h2>
                    <p>{"Veja os resultados de quem decidiu começar hoje."}</p>
                </div>
                <div class="grid three">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="testimonial">
                            <div class="stars">{star_rating(t.stars)}</div>
                            <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                            <p class="testimonial-name">{t.name}</p>
                            <p class="testimonial-role">{t.role}</p>
                        </div>
                    }) }
                </div>
            </Section>

            // The method
            <Section class="light bordered">
                <div class="section-heading">
                    <h2>{"O Que Você Vai Aprender"}</h2>
                    <p>{"Um método estruturado, direto ao ponto, sem enrolação."}</p>
                </div>
                <div class="grid two">
                    { for CURRICULUM.iter().map(|card| html! {
                        <div class="lesson">
                            <div class="lesson-icon">{card.icon}</div>
                            <div>
                                <h3>{card.title}</h3>
                                <p>{card.desc}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </Section>

            // Benefits
            <Section>
                <div class="benefits-panel">
                    <h2>{"Ao aplicar o método você poderá:"}</h2>
                    <div class="grid two">
                        { for BENEFITS.iter().map(|item| html! {
                            <div class="benefit"><span class="check">{"✔"}</span><span>{*item}</span></div>
                        }) }
                    </div>
                </div>
            </Section>

            // Urgency
            <Section class="centered">
                <div class="narrow">
                    <div class="big-icon">{"⏰"}</div>
                    <h2>{"O Tempo Está Correndo"}</h2>
                    <p class="lead">
                        {"Quem dominar agora esse formato sai na frente. Quem esperar, vai entrar quando o mercado já estiver saturado. O algoritmo recompensa quem começa cedo."}
                    </p>
                    <div class="warning">
                        <p>{"Aproveite o preço promocional de lançamento antes que suba!"}</p>
                    </div>
                </div>
            </Section>

            // Deliverables
            <Section class="muted">
                <div class="section-heading">
                    <h2>{"O Que Você Recebe"}</h2>
                </div>
                <div class="grid three">
                    { for DELIVERABLES.iter().map(|card| html! {
                        <div class="tile">
                            <div class="tile-icon">{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p>{card.desc}</p>
                        </div>
                    }) }
                </div>
            </Section>

            // FAQ
            <Section>
                <div class="section-heading">
                    <h2>{"Dúvidas Frequentes"}</h2>
                    <p>{"Tire suas dúvidas antes de começar."}</p>
                </div>
                <div class="faq-panel">
                    <DisclosureList entries={FAQ_ENTRIES} />
                </div>
            </Section>

            // Guarantee
            <Section>
                <div class="guarantee">
                    <div class="big-icon">{"🛡"}</div>
                    <h2>{"Risco Zero: Garantia de 7 Dias"}</h2>
                    <p class="lead">
                        {"Garantia incondicional de 7 dias. Se você ler e perceber que não é para você, devolvemos seu investimento. Sem perguntas, sem burocracia."}
                    </p>
                    <div class="pill">{"VOCÊ NÃO TEM NADA A PERDER"}</div>
                </div>
            </Section>

            // Final offer
            <Section id={config::OFFER_ANCHOR_ID} class={classes!("dark", "centered")}>
                <div class="narrow">
                    <div class="offer-timer">
                        <h2 class="offer-expires">{"A oferta expira em:"}</h2>
                        <CountdownDisplay />
                    </div>
                    <h2 class="offer-title">{"Oferta Especial"}</h2>
                    <div class="price-block">
                        <p class="old-price">{"De R$ 99,90"}</p>
                        <p class="new-price">{"R$ 19,90"}</p>
                        <p class="price-note">{"Pagamento único. Acesso vitalício."}</p>
                    </div>
                    <p class="pizza">{"Menos que uma pizza. E pode se tornar sua nova fonte de renda."}</p>
                    <CtaButton onclick={on_checkout} class="checkout">
                        {"QUERO MEU ACESSO AGORA →"}
                    </CtaButton>
                    <div class="payment-methods">
                        { for PAYMENT_METHODS.iter().map(|method| html! {
                            <span>{*method}</span>
                        }) }
                    </div>
                </div>
            </Section>

            <footer class="page-footer">
                <p>{"© 2026 Método Objetos que Falam. Todos os direitos reservados."}</p>
                <p class="disclaimer">
                    {"Este site não é afiliado ao Facebook, Google ou TikTok. Os resultados podem variar de pessoa para pessoa e dependem da aplicação correta do método."}
                </p>
            </footer>

            <style>
                {r#"
                .sales-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    color: #0f172a;
                    font-family: 'Inter', system-ui, sans-serif;
                }

                .sales-page ::selection {
                    background: #d1fae5;
                    color: #064e3b;
                }

                .page-section {
                    padding: 4rem 1.5rem;
                }

                .section-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .page-section.dark {
                    background: #0f172a;
                    color: #fff;
                }

                .page-section.light {
                    background: #fff;
                }

                .page-section.bordered {
                    border-top: 1px solid #f1f5f9;
                    border-bottom: 1px solid #f1f5f9;
                }

                .page-section.muted {
                    background: #f8fafc;
                }

                .page-section.centered {
                    text-align: center;
                }

                .narrow {
                    max-width: 42rem;
                    margin: 0 auto;
                }

                h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 1.5rem;
                    line-height: 1.2;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading p,
                .lead {
                    font-size: 1.25rem;
                    color: #475569;
                    line-height: 1.6;
                }

                .hero {
                    padding: 3rem 1.5rem 5rem;
                    text-align: center;
                    background: #fff;
                    border-bottom: 1px solid #f1f5f9;
                }

                .hero-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    background: #d1fae5;
                    color: #047857;
                    border-radius: 9999px;
                }

                .hero h1 {
                    font-size: 2.5rem;
                    font-weight: 900;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .highlight {
                    color: #10b981;
                    text-decoration: underline;
                    text-decoration-color: #a7f3d0;
                    text-underline-offset: 8px;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #475569;
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .hero-note {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }

                .fade-in-up {
                    animation: fadeInUp 0.6s ease-out both;
                }

                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .cta-button {
                    width: 100%;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    font-weight: 700;
                    font-size: 1.125rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.2s ease;
                }

                .cta-button:hover {
                    transform: scale(1.02);
                }

                .cta-button:active {
                    transform: scale(0.98);
                }

                .cta-primary {
                    background: #10b981;
                    color: #fff;
                    border: none;
                }

                .cta-primary:hover {
                    background: #059669;
                }

                .cta-button.checkout {
                    font-size: 1.5rem;
                    padding: 1.5rem 3rem;
                }

                .two-columns {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .cross-list {
                    list-style: none;
                    padding: 0;
                }

                .cross-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.125rem;
                    color: #cbd5e1;
                    margin-bottom: 1rem;
                }

                .cross {
                    color: #ef4444;
                    font-weight: 900;
                }

                .quote-card {
                    background: #1e293b;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #334155;
                }

                .quote {
                    font-size: 1.25rem;
                    font-style: italic;
                    color: #cbd5e1;
                    margin-bottom: 1.5rem;
                }

                .accent {
                    color: #34d399;
                    font-weight: 700;
                }

                .character {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    background: rgba(51, 65, 85, 0.5);
                    border: 1px solid #475569;
                    border-radius: 1rem;
                }

                .character-emoji {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    flex-shrink: 0;
                }

                .character-name {
                    color: #e2e8f0;
                    font-weight: 700;
                }

                .character-line {
                    color: #94a3b8;
                    font-size: 0.875rem;
                }

                .views-claim {
                    margin-top: 2rem;
                    text-align: center;
                    font-weight: 700;
                    font-size: 1.5rem;
                    color: #34d399;
                }

                .grid {
                    display: grid;
                    gap: 1.5rem;
                    grid-template-columns: 1fr;
                }

                .tile {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .tile.centered {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 1rem;
                }

                .tile-icon {
                    font-size: 1.5rem;
                    padding: 0.75rem;
                    background: #ecfdf5;
                    border-radius: 0.75rem;
                }

                .tile-title {
                    font-weight: 700;
                    color: #334155;
                }

                .callout {
                    margin-top: 4rem;
                    padding: 2rem;
                    background: #ecfdf5;
                    border: 1px solid #d1fae5;
                    border-radius: 1.5rem;
                    text-align: center;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #064e3b;
                }

                .testimonial {
                    background: #f8fafc;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #f1f5f9;
                }

                .stars {
                    color: #10b981;
                    margin-bottom: 1rem;
                }

                .testimonial-text {
                    color: #334155;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }

                .testimonial-name {
                    font-weight: 700;
                }

                .testimonial-role {
                    font-size: 0.875rem;
                    color: #64748b;
                }

                .lesson {
                    display: flex;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    transition: background 0.2s ease;
                }

                .lesson:hover {
                    background: #f8fafc;
                }

                .lesson-icon {
                    flex-shrink: 0;
                    width: 3.5rem;
                    height: 3.5rem;
                    background: #0f172a;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }

                .lesson h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .lesson p {
                    color: #475569;
                    line-height: 1.6;
                }

                .benefits-panel {
                    background: #059669;
                    color: #fff;
                    padding: 3rem;
                    border-radius: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .benefits-panel h2 {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .benefit {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1rem;
                    font-weight: 700;
                }

                .check {
                    color: #6ee7b7;
                }

                .big-icon {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }

                .warning {
                    display: inline-block;
                    padding: 1.5rem;
                    background: #fef2f2;
                    border: 1px solid #fee2e2;
                    border-radius: 1rem;
                    color: #dc2626;
                    font-weight: 700;
                }

                .faq-panel {
                    max-width: 48rem;
                    margin: 0 auto;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 2rem;
                    border: 1px solid #f1f5f9;
                }

                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                    padding: 1rem 0;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #1e293b;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .faq-question:hover {
                    color: #059669;
                }

                .faq-chevron {
                    display: inline-block;
                    transition: transform 0.3s ease;
                }

                .faq-chevron.rotated {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    overflow: hidden;
                    animation: expandIn 0.3s ease-out both;
                }

                .faq-answer p {
                    padding-top: 1rem;
                    color: #475569;
                    line-height: 1.6;
                }

                @keyframes expandIn {
                    from { max-height: 0; opacity: 0; }
                    to { max-height: 40rem; opacity: 1; }
                }

                .guarantee {
                    max-width: 56rem;
                    margin: 0 auto;
                    background: #fff;
                    padding: 2.5rem;
                    border-radius: 3rem;
                    border: 2px solid #f1f5f9;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    text-align: center;
                }

                .pill {
                    display: inline-block;
                    padding: 0.5rem 1.5rem;
                    background: #f1f5f9;
                    border-radius: 9999px;
                    font-weight: 700;
                    color: #475569;
                }

                .offer-timer {
                    margin-bottom: 3rem;
                }

                .offer-expires {
                    font-size: 1.875rem;
                    color: #34d399;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .countdown {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }

                .countdown-tile {
                    background: #1e293b;
                    color: #fff;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    min-width: 80px;
                }

                .countdown-value {
                    font-size: 1.5rem;
                    font-weight: 900;
                    font-variant-numeric: tabular-nums;
                }

                .countdown-label {
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    opacity: 0.5;
                }

                .offer-title {
                    font-size: 3rem;
                    margin-bottom: 2rem;
                }

                .price-block {
                    margin-bottom: 2.5rem;
                }

                .old-price {
                    color: #94a3b8;
                    font-size: 1.25rem;
                    text-decoration: line-through;
                    margin-bottom: 0.5rem;
                }

                .new-price {
                    font-size: 4.5rem;
                    font-weight: 900;
                    color: #34d399;
                    margin-bottom: 1rem;
                }

                .price-note {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                }

                .pizza {
                    font-size: 1.125rem;
                    color: #94a3b8;
                    margin-bottom: 2.5rem;
                }

                .payment-methods {
                    margin-top: 3rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    opacity: 0.5;
                    font-weight: 700;
                    font-size: 1.25rem;
                    font-style: italic;
                }

                .page-footer {
                    padding: 3rem 1.5rem;
                    text-align: center;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    border-top: 1px solid #f1f5f9;
                    background: #fff;
                }

                .page-footer .disclaimer {
                    max-width: 42rem;
                    margin: 1rem auto 0;
                }

                @media (min-width: 768px) {
                    .page-section {
                        padding: 6rem 3rem;
                    }

                    h2 {
                        font-size: 3rem;
                    }

                    .hero h1 {
                        font-size: 3.75rem;
                    }

                    .cta-button {
                        width: auto;
                    }

                    .cta-button.checkout {
                        width: 100%;
                    }

                    .two-columns,
                    .grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .guarantee {
                        padding: 4rem;
                    }

                    .new-price {
                        font-size: 6rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::testing::{Intent, RecordingNavigation};

    #[test]
    fn test_scroll_to_offer_targets_offer_anchor() {
        let navigation = RecordingNavigation::with_anchors(&["offer"]);
        scroll_to_offer(&navigation);
        assert_eq!(navigation.intents(), vec![Intent::Scroll("offer".to_string())]);
    }

    #[test]
    fn test_scroll_to_offer_without_anchor_is_noop() {
        let navigation = RecordingNavigation::with_anchors(&[]);
        scroll_to_offer(&navigation);
        scroll_to_offer(&navigation);
        assert!(navigation.intents().is_empty());
    }

    #[test]
    fn test_checkout_redirects_to_exact_url() {
        let navigation = RecordingNavigation::default();
        initiate_checkout(&navigation);
        assert_eq!(
            navigation.intents(),
            vec![Intent::Redirect("https://pay.kiwify.com.br/A804HYQ".to_string())]
        );
    }

    #[test]
    fn test_checkout_does_not_scroll() {
        let navigation = RecordingNavigation::with_anchors(&["offer"]);
        initiate_checkout(&navigation);
        assert!(navigation
            .intents()
            .iter()
            .all(|intent| matches!(intent, Intent::Redirect(_))));
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(star_rating(0), "");
        assert_eq!(star_rating(5), "★★★★★");
        for t in TESTIMONIALS.iter() {
            assert_eq!(star_rating(t.stars).chars().count(), t.stars);
        }
    }

    #[test]
    fn test_faq_entries_are_complete() {
        assert_eq!(FAQ_ENTRIES.len(), 4);
        for entry in FAQ_ENTRIES.iter() {
            assert!(entry.question.ends_with('?'));
            assert!(!entry.answer.is_empty());
        }
    }
}
